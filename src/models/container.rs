// Docker container models

use serde::{Deserialize, Serialize};

use super::{MemorySample, Sample, latest_value, nullable};

/// Container lifecycle status; serializes to lowercase JSON (e.g. "running").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    Running,
    Stopped,
    Restarting,
    Exited,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ContainerStatus {
    /// Card ordering rank: running < restarting < stopped < exited < anything else.
    pub fn rank(self) -> u32 {
        match self {
            ContainerStatus::Running => 0,
            ContainerStatus::Restarting => 1,
            ContainerStatus::Stopped => 2,
            ContainerStatus::Exited => 3,
            ContainerStatus::Unknown => 999,
        }
    }

    pub fn is_running(self) -> bool {
        self == ContainerStatus::Running
    }

    pub fn is_offline(self) -> bool {
        matches!(self, ContainerStatus::Stopped | ContainerStatus::Exited)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerStatus::Running => "running",
            ContainerStatus::Stopped => "stopped",
            ContainerStatus::Restarting => "restarting",
            ContainerStatus::Exited => "exited",
            ContainerStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    pub name: String,
    pub status: ContainerStatus,
    /// CPU percent series.
    #[serde(deserialize_with = "nullable")]
    pub cpu_usage: Vec<Sample>,
    /// RAM series in MB; `total_memory` is the container limit in MB.
    #[serde(deserialize_with = "nullable")]
    pub ram_usage: Vec<MemorySample>,
    /// Receive rate series, bytes per second.
    #[serde(deserialize_with = "nullable")]
    pub network_rx_bytes: Vec<Sample>,
    /// Transmit rate series, bytes per second.
    #[serde(deserialize_with = "nullable")]
    pub network_tx_bytes: Vec<Sample>,
    /// Seconds since start.
    pub uptime: u64,
    /// Epoch ms when the container stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<i64>,
    pub total_rx_bytes: u64,
    pub total_tx_bytes: u64,
    pub block_read: u64,
    pub block_write: u64,
}

impl Container {
    pub fn latest_cpu(&self) -> f64 {
        latest_value(&self.cpu_usage)
    }

    pub fn latest_ram(&self) -> f64 {
        latest_value(&self.ram_usage)
    }

    pub fn latest_rx(&self) -> f64 {
        latest_value(&self.network_rx_bytes)
    }

    pub fn latest_tx(&self) -> f64 {
        latest_value(&self.network_tx_bytes)
    }

    /// Memory limit (MB) attached to the newest RAM point, 0 when unknown.
    pub fn memory_limit(&self) -> f64 {
        self.ram_usage.last().map(|m| m.total_memory).unwrap_or(0.0)
    }
}
