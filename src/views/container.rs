// Per-container card and overview row, built straight from the server-provided series

use super::{ALERT_COLOR, COMPUTE_COLOR, COOL_COLOR, Card, HOT_COLOR, MEMORY_COLOR};
use crate::chart::Scale;
use crate::format;
use crate::models::{Container, ContainerStatus, Sample, max_value};

const NETWORK_HEADROOM: f64 = 1.2;

/// Status badge colour class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Alert,
    Warn,
}

impl Tone {
    pub fn for_status(status: ContainerStatus) -> Self {
        match status {
            ContainerStatus::Running => Tone::Ok,
            ContainerStatus::Stopped | ContainerStatus::Exited => Tone::Alert,
            ContainerStatus::Restarting | ContainerStatus::Unknown => Tone::Warn,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tone::Ok => COOL_COLOR,
            Tone::Alert => ALERT_COLOR,
            Tone::Warn => HOT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerCard {
    pub id: String,
    pub name: String,
    pub status: ContainerStatus,
    pub tone: Tone,
    /// Stopped or exited; the card is drawn dimmed.
    pub offline: bool,
    /// "Up 1h 2m 3s" while running, "Finished 5 minutes ago" once stopped.
    pub detail: String,
    pub cards: Vec<Card>,
    pub total_rx_bytes: u64,
    pub total_tx_bytes: u64,
    pub block_read: u64,
    pub block_write: u64,
}

impl ContainerCard {
    pub fn from_container(container: &Container, now_ms: i64) -> Self {
        let status = container.status;
        let ram: Vec<Sample> = container.ram_usage.iter().copied().map(Sample::from).collect();
        let limit = container.memory_limit();
        let memory_max = if limit > 0.0 { limit } else { 100.0 };

        let net_max = max_value(&container.network_rx_bytes, 1.0)
            .max(max_value(&container.network_tx_bytes, 1.0))
            * NETWORK_HEADROOM;

        let cards = vec![
            Card::from_samples("CPU", container.cpu_usage.clone(), Scale::Fixed(100.0))
                .color(COMPUTE_COLOR),
            Card::from_samples("Memory", ram, Scale::Fixed(memory_max))
                .display(format::megabytes(container.latest_ram()))
                .color(MEMORY_COLOR),
            Card::from_samples(
                "Inbound",
                container.network_rx_bytes.clone(),
                Scale::Fixed(net_max),
            )
            .display(format::network_speed(container.latest_rx()))
            .color(HOT_COLOR),
            Card::from_samples(
                "Outbound",
                container.network_tx_bytes.clone(),
                Scale::Fixed(net_max),
            )
            .display(format::network_speed(container.latest_tx()))
            .color(COOL_COLOR),
        ];

        Self {
            id: container.id.clone(),
            name: container.name.clone(),
            status,
            tone: Tone::for_status(status),
            offline: status.is_offline(),
            detail: detail(container, now_ms),
            cards,
            total_rx_bytes: container.total_rx_bytes,
            total_tx_bytes: container.total_tx_bytes,
            block_read: container.block_read,
            block_write: container.block_write,
        }
    }
}

fn detail(container: &Container, now_ms: i64) -> String {
    if container.status.is_running() {
        return format!("Up {}", format::uptime(container.uptime));
    }
    match container.finished_at {
        Some(ts) if ts > 0 => format!("Finished {}", format::relative_time(ts, now_ms)),
        _ => container.status.as_str().to_string(),
    }
}

/// One row of the containers overview list.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerEntry {
    pub id: String,
    pub name: String,
    pub status: ContainerStatus,
    pub cpu: f64,
    pub ram: String,
}

impl From<&Container> for ContainerEntry {
    fn from(c: &Container) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            status: c.status,
            cpu: c.latest_cpu(),
            ram: format::megabytes(c.latest_ram()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemorySample;

    fn stopped(finished_at: Option<i64>) -> Container {
        Container {
            id: "c1".into(),
            name: "web".into(),
            status: ContainerStatus::Exited,
            finished_at,
            ..Default::default()
        }
    }

    #[test]
    fn exited_container_is_offline_with_finish_time() {
        let card = ContainerCard::from_container(&stopped(Some(0)), 600_000);
        assert!(card.offline);
        assert_eq!(card.tone, Tone::Alert);
        assert_eq!(card.detail, "exited");

        let card = ContainerCard::from_container(&stopped(Some(300_000)), 600_000);
        assert_eq!(card.detail, "Finished 5 minutes ago");
    }

    #[test]
    fn memory_scale_uses_limit_when_known() {
        let mut c = stopped(None);
        c.status = ContainerStatus::Running;
        c.uptime = 61;
        c.ram_usage = vec![MemorySample {
            value: 256.0,
            timestamp: 1,
            is_spike: false,
            total_memory: 1024.0,
        }];
        let card = ContainerCard::from_container(&c, 0);
        assert_eq!(card.detail, "Up 1m 1s");
        assert_eq!(card.cards[1].scale, Scale::Fixed(1024.0));
        assert_eq!(card.cards[1].value, 256.0);
        // no network history: floor of 1 plus headroom
        assert_eq!(card.cards[2].scale, Scale::Fixed(1.2));
    }
}
