// CPU time breakdown and per-core usage

use super::{COOL_COLOR, Card, Fact, HOT_COLOR, MEMORY_COLOR, Panel, WARM_COLOR};
use crate::chart::Scale;
use crate::models::CombinedSnapshot;
use crate::window::{PerCoreWindows, RollingWindow};

/// Core cards shown at most, to keep large hosts readable.
pub const MAX_DISPLAYED_CORES: usize = 12;

pub struct CpuDetail {
    io_wait: RollingWindow,
    steal: RollingWindow,
    user: RollingWindow,
    system: RollingWindow,
    cores: PerCoreWindows,
    core_count: u32,
    model: String,
    mhz: f64,
}

impl CpuDetail {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            io_wait: RollingWindow::with_zero(capacity, now_ms),
            steal: RollingWindow::with_zero(capacity, now_ms),
            user: RollingWindow::with_zero(capacity, now_ms),
            system: RollingWindow::with_zero(capacity, now_ms),
            cores: PerCoreWindows::new(capacity),
            core_count: 0,
            model: String::new(),
            mhz: 0.0,
        }
    }

    pub fn cores(&self) -> &PerCoreWindows {
        &self.cores
    }
}

impl Panel for CpuDetail {
    fn title(&self) -> &'static str {
        "CPU"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let info = &snapshot.system_info;
        if let Some(cpu) = &info.cpu_info {
            if let Some(times) = &cpu.cpu_times {
                self.io_wait.record(times.iowait, now_ms);
                self.steal.record(times.steal, now_ms);
                self.user.record(times.user, now_ms);
                self.system.record(times.system, now_ms);
            }
            self.model.clone_from(&cpu.model_name);
            self.mhz = cpu.mhz;
        }
        if !info.cpu_per_core.is_empty() {
            self.cores.push_samples(&info.cpu_per_core, now_ms);
        }
        self.core_count = info.cpu_cores;
    }

    fn cards(&self) -> Vec<Card> {
        let pct = Scale::Fixed(100.0);
        let mut cards = vec![
            Card::new("IO Wait", &self.io_wait, pct).color(HOT_COLOR),
            Card::new("Steal", &self.steal, pct).color(WARM_COLOR),
            Card::new("User", &self.user, pct).color(COOL_COLOR),
            Card::new("System", &self.system, pct).color(MEMORY_COLOR),
        ];
        let shown = (self.core_count as usize).min(MAX_DISPLAYED_CORES);
        for core in 0..shown {
            let card = match self.cores.get(core) {
                Some(w) => Card::new(format!("Core {core}"), w, pct),
                None => Card::from_samples(format!("Core {core}"), Vec::new(), pct),
            };
            cards.push(card);
        }
        cards
    }

    fn facts(&self) -> Vec<Fact> {
        if self.model.is_empty() {
            return Vec::new();
        }
        vec![
            Fact::new("Model", self.model.clone()),
            Fact::new("Clock", format!("{:.0} MHz", self.mhz)),
            Fact::new("Cores", self.core_count.to_string()),
        ]
    }
}
