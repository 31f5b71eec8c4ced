// Owns every view and routes snapshots into them. All views update on every
// snapshot regardless of the selected page, so switching pages shows full history.

use crate::models::CombinedSnapshot;
use crate::nav::Page;
use crate::views::{
    Card, ContainerCard, ContainerEntry, ContainersOverview, CoolifyOverview, CpuDetail,
    DiskDetail, Fact, MemoryDetail, NetworkDetail, Panel, SystemOverview,
};

/// One titled block of cards and facts, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub cards: Vec<Card>,
    pub facts: Vec<Fact>,
}

impl Section {
    fn of(panel: &dyn Panel) -> Self {
        Self {
            title: panel.title(),
            cards: panel.cards(),
            facts: panel.facts(),
        }
    }
}

pub struct Dashboard {
    system: SystemOverview,
    cpu: CpuDetail,
    memory: MemoryDetail,
    network: NetworkDetail,
    disk: DiskDetail,
    containers: ContainersOverview,
    coolify: CoolifyOverview,
    applied: u64,
}

impl Dashboard {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            system: SystemOverview::new(capacity, now_ms),
            cpu: CpuDetail::new(capacity, now_ms),
            memory: MemoryDetail::new(capacity, now_ms),
            network: NetworkDetail::new(capacity, now_ms),
            disk: DiskDetail::new(capacity, now_ms),
            containers: ContainersOverview::new(capacity, now_ms),
            coolify: CoolifyOverview::new(capacity, now_ms),
            applied: 0,
        }
    }

    pub fn apply(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        for panel in self.panels_mut() {
            panel.update(snapshot, now_ms);
        }
        self.applied += 1;
    }

    /// Snapshots folded in so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn sections(&self, page: Page) -> Vec<Section> {
        self.panels(page).into_iter().map(Section::of).collect()
    }

    pub fn panels(&self, page: Page) -> Vec<&dyn Panel> {
        match page {
            Page::System => vec![
                &self.system,
                &self.cpu,
                &self.memory,
                &self.network,
                &self.disk,
            ],
            Page::Containers => vec![&self.containers],
            Page::Coolify => vec![&self.coolify],
        }
    }

    fn panels_mut(&mut self) -> [&mut dyn Panel; 7] {
        [
            &mut self.system,
            &mut self.cpu,
            &mut self.memory,
            &mut self.network,
            &mut self.disk,
            &mut self.containers,
            &mut self.coolify,
        ]
    }

    /// Overview list rows; only the containers page has one.
    pub fn entries(&self, page: Page) -> Vec<ContainerEntry> {
        match page {
            Page::Containers => self.containers.entries(),
            Page::System | Page::Coolify => Vec::new(),
        }
    }

    pub fn container_cards(&self, page: Page, now_ms: i64) -> Vec<ContainerCard> {
        match page {
            Page::System => Vec::new(),
            Page::Containers => self.containers.container_cards(now_ms),
            Page::Coolify => self.coolify.container_cards(now_ms),
        }
    }

    pub fn system(&self) -> &SystemOverview {
        &self.system
    }

    pub fn cpu(&self) -> &CpuDetail {
        &self.cpu
    }

    pub fn memory(&self) -> &MemoryDetail {
        &self.memory
    }

    pub fn containers(&self) -> &ContainersOverview {
        &self.containers
    }

    pub fn coolify(&self) -> &CoolifyOverview {
        &self.coolify
    }
}

/// Wall-clock epoch milliseconds, 0 if the clock is before the epoch.
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
            0
        })
}
