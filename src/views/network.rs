// Host network rates

use super::{COOL_COLOR, Card, Fact, HOT_COLOR, Panel};
use crate::chart::Scale;
use crate::format;
use crate::models::CombinedSnapshot;
use crate::window::RollingWindow;

const HEADROOM: f64 = 1.15;

pub struct NetworkDetail {
    inbound: RollingWindow,
    outbound: RollingWindow,
    total_sent: f64,
    total_recv: f64,
}

impl NetworkDetail {
    pub fn new(capacity: usize, now_ms: i64) -> Self {
        Self {
            inbound: RollingWindow::with_zero(capacity, now_ms),
            outbound: RollingWindow::with_zero(capacity, now_ms),
            total_sent: 0.0,
            total_recv: 0.0,
        }
    }
}

impl Panel for NetworkDetail {
    fn title(&self) -> &'static str {
        "Network"
    }

    fn update(&mut self, snapshot: &CombinedSnapshot, now_ms: i64) {
        let info = &snapshot.system_info;
        let Some(net) = &info.network_info else {
            return;
        };
        self.inbound.record(info.bytes_recv_per_second, now_ms);
        self.outbound.record(info.bytes_sent_per_second, now_ms);
        self.total_sent = net.total_bytes_sent;
        self.total_recv = net.total_bytes_recv;
    }

    fn cards(&self) -> Vec<Card> {
        vec![
            Card::new(
                "Inbound",
                &self.inbound,
                Scale::Fixed(self.inbound.max_value(1.0) * HEADROOM),
            )
            .display(format::network_speed(self.inbound.latest_value()))
            .color(HOT_COLOR),
            Card::new(
                "Outbound",
                &self.outbound,
                Scale::Fixed(self.outbound.max_value(1.0) * HEADROOM),
            )
            .display(format::network_speed(self.outbound.latest_value()))
            .color(COOL_COLOR),
        ]
    }

    fn facts(&self) -> Vec<Fact> {
        vec![
            Fact::new("Received", format::bytes(self.total_recv)),
            Fact::new("Sent", format::bytes(self.total_sent)),
        ]
    }
}
