// Host overview: compute, network, memory and disk from the server's resource series

use super::{COMPUTE_COLOR, Card, DISK_COLOR, Fact, MEMORY_COLOR, NETWORK_COLOR, Panel};
use crate::chart::Scale;
use crate::format;
use crate::models::{CombinedSnapshot, Sample, SystemInfo};
use crate::window::RollingWindow;

/// Headroom above the observed peak for the network chart.
const NETWORK_HEADROOM: f64 = 1.2;

pub struct SystemOverview {
    cpu: RollingWindow,
    network: RollingWindow,
    memory: RollingWindow,
    disk: RollingWindow,
    facts: Option<HostFacts>,
}

struct HostFacts {
    uptime: u64,
    cores: u32,
    total_ram_mb: f64,
    total_disk_bytes: f64,
    running_containers: u32,
    model: String,
}

impl HostFacts {
    fn from_info(info: &SystemInfo) -> Self {
        Self {
            uptime: info.uptime,
            cores: info.cpu_cores,
            total_ram_mb: info.total_ram,
            total_disk_bytes: info.total_disk,
            running_containers: info.running_containers,
            model: info
                .cpu_info
                .as_ref()
                .map(|c| c.model_name.clone())
                .unwrap_or_default(),
        }
    }
}

impl SystemOverview {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            cpu: RollingWindow::seeded(capacity, now_ms),
            network: RollingWindow::seeded(capacity, now_ms),
            memory: RollingWindow::seeded(capacity, now_ms),
            disk: RollingWindow::seeded(capacity, now_ms),
            facts: None,
        }
    }

    pub fn cpu(&self) -> &RollingWindow {
        &self.cpu
    }

    pub fn memory(&self) -> &RollingWindow {
        &self.memory
    }

    /// Total memory (MB) carried by the newest memory sample.
    pub fn total_memory(&self) -> f64 {
        self.memory.latest().and_then(|s| s.total).unwrap_or(0.0)
    }

    /// Total disk (MB) carried by the newest disk sample.
    pub fn total_disk(&self) -> f64 {
        self.disk.latest().and_then(|s| s.total).unwrap_or(0.0)
    }
}

fn newest_or_zero(series: &[Sample], now_ms: i64) -> Sample {
    series.last().copied().unwrap_or_else(|| Sample::zero(now_ms))
}

impl Panel for SystemOverview {
    fn title(&self) -> &'static str {
        "System Overview"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let data = &snapshot.system_info.resource_data;
        self.cpu.push(newest_or_zero(&data.cpu, now_ms));
        self.network.push(newest_or_zero(&data.network, now_ms));
        self.memory.push(
            data.memory
                .last()
                .map(|m| Sample::from(*m))
                .unwrap_or_else(|| Sample::zero(now_ms)),
        );
        self.disk.push(newest_or_zero(&data.disk, now_ms));
        self.facts = Some(HostFacts::from_info(&snapshot.system_info));
    }

    fn cards(&self) -> Vec<Card> {
        let network_max = self.network.max_value(1.0) * NETWORK_HEADROOM;
        vec![
            Card::new("Compute", &self.cpu, Scale::Fixed(100.0)).color(COMPUTE_COLOR),
            Card::new("Network", &self.network, Scale::Fixed(network_max))
                .display(format::network_speed(self.network.latest_value()))
                .color(NETWORK_COLOR),
            Card::new("Memory", &self.memory, Scale::Fixed(100.0)).color(MEMORY_COLOR),
            Card::new("Disk", &self.disk, Scale::Fixed(100.0)).color(DISK_COLOR),
        ]
    }

    fn facts(&self) -> Vec<Fact> {
        let Some(f) = &self.facts else {
            return Vec::new();
        };
        let mut out = vec![
            Fact::new("Uptime", format::uptime(f.uptime)),
            Fact::new("CPU cores", f.cores.to_string()),
            Fact::new("Total RAM", format::megabytes(f.total_ram_mb)),
            Fact::new("Total disk", format::bytes(f.total_disk_bytes)),
            Fact::new("Running containers", f.running_containers.to_string()),
        ];
        if !f.model.is_empty() {
            out.push(Fact::new("CPU model", f.model.clone()));
        }
        out
    }
}
