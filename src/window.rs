// Bounded sample history for sparkline charts.
// Push evicts the oldest sample once capacity is reached; order is arrival order.

use std::collections::{BTreeMap, VecDeque};

use crate::models::Sample;

/// Number of samples kept per metric unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 7;

/// Spacing of the two zero samples a seeded window starts with.
const SEED_SPACING_MS: i64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct RollingWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl RollingWindow {
    /// Empty window. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Window holding two zero samples (`now - 1s`, `now`) so a line can be drawn
    /// before the first snapshot arrives.
    pub fn seeded(capacity: usize, now_ms: i64) -> Self {
        let mut w = Self::new(capacity);
        w.push(Sample::zero(now_ms - SEED_SPACING_MS));
        w.push(Sample::zero(now_ms));
        w
    }

    /// Window holding a single zero sample.
    pub fn with_zero(capacity: usize, now_ms: i64) -> Self {
        let mut w = Self::new(capacity);
        w.push(Sample::zero(now_ms));
        w
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn record(&mut self, value: f64, timestamp: i64) {
        self.push(Sample::new(value, timestamp));
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Newest value, 0 when empty.
    pub fn latest_value(&self) -> f64 {
        self.latest().map(|s| s.value).unwrap_or(0.0)
    }

    /// Largest value in the window, never below `floor`.
    pub fn max_value(&self, floor: f64) -> f64 {
        self.samples.iter().map(|s| s.value).fold(floor, f64::max)
    }

    pub fn has_spike(&self) -> bool {
        self.samples.iter().any(|s| s.is_spike)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator {
        self.samples.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a RollingWindow {
    type Item = &'a Sample;
    type IntoIter = std::collections::vec_deque::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// One window per logical core, keyed by core index.
#[derive(Debug, Clone, Default)]
pub struct PerCoreWindows {
    windows: BTreeMap<usize, RollingWindow>,
    capacity: usize,
}

impl PerCoreWindows {
    pub fn new(capacity: usize) -> Self {
        Self {
            windows: BTreeMap::new(),
            capacity,
        }
    }

    /// Push one reading per core. Cores missing from `usages` are dropped;
    /// new cores start with this single sample.
    pub fn push_samples(&mut self, usages: &[f64], timestamp: i64) {
        let capacity = self.capacity;
        self.windows.retain(|idx, _| *idx < usages.len());
        for (idx, usage) in usages.iter().enumerate() {
            self.windows
                .entry(idx)
                .or_insert_with(|| RollingWindow::new(capacity))
                .record(*usage, timestamp);
        }
    }

    pub fn get(&self, core: usize) -> Option<&RollingWindow> {
        self.windows.get(&core)
    }

    pub fn cores(&self) -> usize {
        self.windows.len()
    }
}
