// Dashboard views. Each view owns its rolling windows privately and rebuilds
// its cards from them; nothing is shared between views but the raw snapshot.

mod container;
mod containers;
mod coolify;
mod cpu;
mod disk;
mod memory;
mod network;
mod system;

use crate::chart::{Dimensions, Scale, Series, build_series};
use crate::models::{CombinedSnapshot, Sample};
use crate::window::RollingWindow;

pub use container::{ContainerCard, ContainerEntry, Tone};
pub use containers::ContainersOverview;
pub use coolify::CoolifyOverview;
pub use cpu::{CpuDetail, MAX_DISPLAYED_CORES};
pub use disk::DiskDetail;
pub use memory::MemoryDetail;
pub use network::NetworkDetail;
pub use system::SystemOverview;

pub const COMPUTE_COLOR: &str = "#1e90ff";
pub const MEMORY_COLOR: &str = "#00ced1";
pub const NETWORK_COLOR: &str = "#8b5cf6";
pub const DISK_COLOR: &str = "#f59e0b";
pub const HOT_COLOR: &str = "#ff6347";
pub const COOL_COLOR: &str = "#3cb371";
pub const WARM_COLOR: &str = "#ffa500";
pub const ALERT_COLOR: &str = "#ef4444";

/// One metric tile: current value, its history, and how to scale the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: String,
    pub value: f64,
    pub display: String,
    pub samples: Vec<Sample>,
    pub scale: Scale,
    pub color: &'static str,
}

impl Card {
    pub fn new(label: impl Into<String>, window: &RollingWindow, scale: Scale) -> Self {
        let value = window.latest_value();
        Self {
            label: label.into(),
            value,
            display: crate::format::percent(value),
            samples: window.to_vec(),
            scale,
            color: COMPUTE_COLOR,
        }
    }

    pub fn from_samples(label: impl Into<String>, samples: Vec<Sample>, scale: Scale) -> Self {
        let value = samples.last().map(|s| s.value).unwrap_or(0.0);
        Self {
            label: label.into(),
            value,
            display: crate::format::percent(value),
            samples,
            scale,
            color: COMPUTE_COLOR,
        }
    }

    pub fn display(mut self, display: String) -> Self {
        self.display = display;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn has_spike(&self) -> bool {
        self.samples.iter().any(|s| s.is_spike)
    }

    /// Chart geometry, `None` while fewer than two samples exist.
    pub fn series(&self, dims: Dimensions) -> Option<Series> {
        build_series(&self.samples, self.scale, dims)
    }
}

/// A static label/value pair shown beside the cards (uptime, core count, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub trait Panel {
    fn title(&self) -> &'static str;

    /// Fold one snapshot into the view's windows. `now_ms` stamps derived samples.
    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64);

    fn cards(&self) -> Vec<Card>;

    fn facts(&self) -> Vec<Fact> {
        Vec::new()
    }
}
