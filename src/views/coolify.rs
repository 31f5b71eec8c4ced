// Coolify sub-dashboard: same totals as the containers overview, restricted to
// containers whose name carries the coolify marker.

use super::{
    COMPUTE_COLOR, Card, ContainerCard, DISK_COLOR, Fact, MEMORY_COLOR, NETWORK_COLOR, Panel,
};
use crate::aggregate::{is_coolify, non_zero_or, totals_where};
use crate::chart::Scale;
use crate::format;
use crate::models::{CombinedSnapshot, Container, Sample};
use crate::ordering::card_cmp;
use crate::window::RollingWindow;

const NETWORK_HEADROOM: f64 = 1.5;
/// Disk bound (MB) when the host does not report its disk size.
const DEFAULT_DISK_MB: f64 = 10_000.0;

pub struct CoolifyOverview {
    cpu: RollingWindow,
    network: RollingWindow,
    memory: RollingWindow,
    disk: RollingWindow,
    total_memory: f64,
    total_disk: f64,
    containers: Vec<Container>,
}

impl CoolifyOverview {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            cpu: RollingWindow::seeded(capacity, now_ms),
            network: RollingWindow::seeded(capacity, now_ms),
            memory: RollingWindow::seeded(capacity, now_ms),
            disk: RollingWindow::seeded(capacity, now_ms),
            total_memory: 0.0,
            total_disk: 0.0,
            containers: Vec::new(),
        }
    }

    /// Matching containers by status rank, name, then id.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_cards(&self, now_ms: i64) -> Vec<ContainerCard> {
        self.containers
            .iter()
            .map(|c| ContainerCard::from_container(c, now_ms))
            .collect()
    }
}

impl Panel for CoolifyOverview {
    fn title(&self) -> &'static str {
        "Coolify"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let info = &snapshot.system_info;
        let sum = totals_where(&snapshot.containers, is_coolify);
        let reported = info.resource_data.total_memory();
        if reported > 0.0 {
            self.total_memory = reported;
        }
        self.total_disk = info.resource_data.total_disk();

        self.cpu.record(sum.cpu, now_ms);
        self.network.record(sum.network(), now_ms);
        self.memory
            .push(Sample::new(sum.ram, now_ms).with_total(self.total_memory));
        self.disk.push(info.coolify_disk_usage);

        let mut matching: Vec<Container> = snapshot
            .containers
            .iter()
            .filter(|c| is_coolify(c))
            .cloned()
            .collect();
        matching.sort_by(|a, b| card_cmp(a, b).then_with(|| a.id.cmp(&b.id)));
        self.containers = matching;
    }

    fn cards(&self) -> Vec<Card> {
        vec![
            Card::new("Compute", &self.cpu, Scale::Fixed(100.0)).color(COMPUTE_COLOR),
            Card::new(
                "Network",
                &self.network,
                Scale::Fixed(self.network.max_value(1.0) * NETWORK_HEADROOM),
            )
            .display(format::network_speed(self.network.latest_value()))
            .color(NETWORK_COLOR),
            Card::new(
                "Memory",
                &self.memory,
                Scale::Fixed(non_zero_or(self.total_memory, 1.0)),
            )
            .display(format::megabytes(self.memory.latest_value()))
            .color(MEMORY_COLOR),
            Card::new(
                "Disk",
                &self.disk,
                Scale::Fixed(non_zero_or(self.total_disk, DEFAULT_DISK_MB)),
            )
            .display(format::megabytes(self.disk.latest_value()))
            .color(DISK_COLOR),
        ]
    }

    fn facts(&self) -> Vec<Fact> {
        vec![Fact::new("Coolify containers", self.containers.len().to_string())]
    }
}
