// Host-level snapshot: resource series, static facts, detailed cpu/memory/disk/network info

use serde::{Deserialize, Serialize};

use super::{MemorySample, Sample, nullable};

/// Server-side resource series. Each series normally holds the newest point only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceData {
    #[serde(deserialize_with = "nullable")]
    pub cpu: Vec<Sample>,
    #[serde(deserialize_with = "nullable")]
    pub network: Vec<Sample>,
    #[serde(deserialize_with = "nullable")]
    pub memory: Vec<MemorySample>,
    #[serde(deserialize_with = "nullable")]
    pub disk: Vec<Sample>,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub cpu_per_core: Vec<Sample>,
}

impl ResourceData {
    /// Total memory (MB) reported with the first memory point, 0 when absent.
    pub fn total_memory(&self) -> f64 {
        self.memory.first().map(|m| m.total_memory).unwrap_or(0.0)
    }

    /// Total disk (MB) reported with the first disk point, 0 when absent.
    pub fn total_disk(&self) -> f64 {
        self.disk.first().and_then(|d| d.total).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CpuTimes {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
    pub nice: f64,
    pub iowait: f64,
    pub irq: f64,
    pub softirq: f64,
    pub steal: f64,
    pub guest: f64,
    pub guest_nice: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CpuPercentages {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CpuInfo {
    pub model_name: String,
    pub cores: f64,
    pub threads: f64,
    pub mhz: f64,
    pub cache_size: f64,
    pub cpu_times: Option<CpuTimes>,
    pub cpu_percentages: Option<CpuPercentages>,
}

/// Memory and swap figures in bytes, percentages in 0..=100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoryInfo {
    pub total: f64,
    pub available: f64,
    pub used: f64,
    pub free: f64,
    pub used_percent: f64,
    pub buffers: f64,
    pub cached: f64,
    pub swap_total: f64,
    pub swap_used: f64,
    pub swap_free: f64,
    pub swap_used_percent: f64,
}

/// Root partition usage in bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiskInfo {
    pub path: String,
    pub total: f64,
    pub free: f64,
    pub used: f64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInfo {
    pub total_bytes_sent: f64,
    pub total_bytes_recv: f64,
}

/// Host snapshot (`systemInfo` on the wire).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemInfo {
    pub resource_data: ResourceData,
    /// Size of the Coolify data directories, in MB.
    pub coolify_disk_usage: Sample,
    /// Host uptime in seconds.
    pub uptime: u64,
    pub cpu_cores: u32,
    /// Total RAM in MB.
    #[serde(rename = "totalRAM")]
    pub total_ram: f64,
    /// Total disk in bytes.
    pub total_disk: f64,
    pub running_containers: u32,
    pub cpu_info: Option<CpuInfo>,
    pub memory_info: Option<MemoryInfo>,
    pub disk_info: Option<DiskInfo>,
    pub network_info: Option<NetworkInfo>,
    pub bytes_recv_per_second: f64,
    pub bytes_sent_per_second: f64,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub cpu_per_core: Vec<f64>,
}
