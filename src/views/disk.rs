// Root partition usage

use super::{COOL_COLOR, Card, Fact, HOT_COLOR, Panel};
use crate::aggregate::non_zero_or;
use crate::chart::Scale;
use crate::format;
use crate::models::CombinedSnapshot;
use crate::window::RollingWindow;

pub struct DiskDetail {
    usage: RollingWindow,
    free: RollingWindow,
    total: f64,
    path: String,
}

impl DiskDetail {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            usage: RollingWindow::with_zero(capacity, now_ms),
            free: RollingWindow::with_zero(capacity, now_ms),
            total: 0.0,
            path: String::new(),
        }
    }
}

impl Panel for DiskDetail {
    fn title(&self) -> &'static str {
        "Disk"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let Some(disk) = &snapshot.system_info.disk_info else {
            return;
        };
        self.usage.record(disk.used_percent, now_ms);
        self.free.record(disk.free, now_ms);
        self.total = disk.total;
        self.path.clone_from(&disk.path);
    }

    fn cards(&self) -> Vec<Card> {
        vec![
            Card::new("Usage (root)", &self.usage, Scale::Fixed(100.0)).color(HOT_COLOR),
            Card::new(
                "Free (root)",
                &self.free,
                Scale::Fixed(non_zero_or(self.total, 1.0)),
            )
            .display(format::bytes(self.free.latest_value()))
            .color(COOL_COLOR),
        ]
    }

    fn facts(&self) -> Vec<Fact> {
        if self.path.is_empty() {
            return Vec::new();
        }
        vec![
            Fact::new("Mount", self.path.clone()),
            Fact::new("Size", format::bytes(self.total)),
        ]
    }
}
