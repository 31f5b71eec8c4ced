// Memory breakdown as percentages of total RAM and total swap

use super::{COOL_COLOR, Card, Fact, HOT_COLOR, MEMORY_COLOR, Panel, WARM_COLOR};
use crate::aggregate::percent_of;
use crate::chart::Scale;
use crate::format;
use crate::models::CombinedSnapshot;
use crate::window::RollingWindow;

const MB: f64 = 1024.0 * 1024.0;

pub struct MemoryDetail {
    used: RollingWindow,
    free: RollingWindow,
    buffers: RollingWindow,
    cached: RollingWindow,
    swap_used: RollingWindow,
    swap_free: RollingWindow,
    total: f64,
    swap_total: f64,
}

impl MemoryDetail {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            used: RollingWindow::with_zero(capacity, now_ms),
            free: RollingWindow::with_zero(capacity, now_ms),
            buffers: RollingWindow::with_zero(capacity, now_ms),
            cached: RollingWindow::with_zero(capacity, now_ms),
            swap_used: RollingWindow::with_zero(capacity, now_ms),
            swap_free: RollingWindow::with_zero(capacity, now_ms),
            total: 0.0,
            swap_total: 0.0,
        }
    }

    pub fn buffers(&self) -> &RollingWindow {
        &self.buffers
    }

    pub fn swap_used(&self) -> &RollingWindow {
        &self.swap_used
    }
}

impl Panel for MemoryDetail {
    fn title(&self) -> &'static str {
        "Memory"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let Some(mem) = &snapshot.system_info.memory_info else {
            return;
        };
        self.used.record(mem.used_percent, now_ms);
        self.free.record(100.0 - mem.used_percent, now_ms);
        self.buffers.record(percent_of(mem.buffers, mem.total), now_ms);
        self.cached.record(percent_of(mem.cached, mem.total), now_ms);
        self.swap_used
            .record(percent_of(mem.swap_used, mem.swap_total), now_ms);
        self.swap_free
            .record(percent_of(mem.swap_free, mem.swap_total), now_ms);
        self.total = mem.total;
        self.swap_total = mem.swap_total;
    }

    fn cards(&self) -> Vec<Card> {
        let pct = Scale::Fixed(100.0);
        let mut cards = vec![
            Card::new("Usage", &self.used, pct).color(HOT_COLOR),
            Card::new("Free", &self.free, pct).color(COOL_COLOR),
            Card::new("Buffered", &self.buffers, pct).color(WARM_COLOR),
            Card::new("Cached", &self.cached, pct).color(MEMORY_COLOR),
        ];
        if self.swap_total > 0.0 {
            cards.push(Card::new("Swap Usage", &self.swap_used, pct).color(HOT_COLOR));
            cards.push(Card::new("Swap Free", &self.swap_free, pct).color(COOL_COLOR));
        }
        cards
    }

    fn facts(&self) -> Vec<Fact> {
        vec![
            Fact::new("Total", format::megabytes(self.total / MB)),
            Fact::new("Swap", format::megabytes(self.swap_total / MB)),
        ]
    }
}
