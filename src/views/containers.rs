// All-containers overview: summed usage windows plus the list and card orderings

use super::{
    COMPUTE_COLOR, COOL_COLOR, Card, ContainerCard, ContainerEntry, Fact, HOT_COLOR, MEMORY_COLOR,
    Panel,
};
use crate::aggregate::{non_zero_or, totals};
use crate::chart::Scale;
use crate::format;
use crate::models::{CombinedSnapshot, Container};
use crate::ordering::{sorted_cards, sorted_overview};
use crate::window::RollingWindow;

pub struct ContainersOverview {
    cpu: RollingWindow,
    ram: RollingWindow,
    rx: RollingWindow,
    tx: RollingWindow,
    /// Host memory (MB); kept from the last snapshot that reported it.
    total_memory: f64,
    containers: Vec<Container>,
}

impl ContainersOverview {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            cpu: RollingWindow::seeded(capacity, now_ms),
            ram: RollingWindow::seeded(capacity, now_ms),
            rx: RollingWindow::seeded(capacity, now_ms),
            tx: RollingWindow::seeded(capacity, now_ms),
            total_memory: 0.0,
            containers: Vec::new(),
        }
    }

    pub fn total_memory(&self) -> f64 {
        self.total_memory
    }

    pub fn cpu(&self) -> &RollingWindow {
        &self.cpu
    }

    pub fn ram(&self) -> &RollingWindow {
        &self.ram
    }

    /// List rows: running by RAM, then the rest by name.
    pub fn entries(&self) -> Vec<ContainerEntry> {
        sorted_overview(&self.containers)
            .iter()
            .map(ContainerEntry::from)
            .collect()
    }

    /// Detail cards ordered by status rank then name.
    pub fn container_cards(&self, now_ms: i64) -> Vec<ContainerCard> {
        sorted_cards(&self.containers)
            .iter()
            .map(|c| ContainerCard::from_container(c, now_ms))
            .collect()
    }
}

impl Panel for ContainersOverview {
    fn title(&self) -> &'static str {
        "Containers"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let sum = totals(&snapshot.containers);
        self.cpu.record(sum.cpu, now_ms);
        self.ram.record(sum.ram, now_ms);
        self.rx.record(sum.network_rx, now_ms);
        self.tx.record(sum.network_tx, now_ms);

        let reported = snapshot.system_info.resource_data.total_memory();
        if reported > 0.0 {
            self.total_memory = reported;
        }
        self.containers.clone_from(&snapshot.containers);
    }

    fn cards(&self) -> Vec<Card> {
        let net_max = Scale::Fixed(self.rx.max_value(1.0).max(self.tx.max_value(1.0)));
        vec![
            Card::new("Compute", &self.cpu, Scale::Fixed(100.0)).color(COMPUTE_COLOR),
            Card::new(
                "Memory",
                &self.ram,
                Scale::Fixed(non_zero_or(self.total_memory, 1.0)),
            )
            .display(format::megabytes(self.ram.latest_value()))
            .color(MEMORY_COLOR),
            Card::new("Inbound", &self.rx, net_max)
                .display(format::network_speed(self.rx.latest_value()))
                .color(HOT_COLOR),
            Card::new("Outbound", &self.tx, net_max)
                .display(format::network_speed(self.tx.latest_value()))
                .color(COOL_COLOR),
        ]
    }

    fn facts(&self) -> Vec<Fact> {
        let running = self
            .containers
            .iter()
            .filter(|c| c.status.is_running())
            .count();
        vec![
            Fact::new("Containers", self.containers.len().to_string()),
            Fact::new("Running", running.to_string()),
        ]
    }
}
