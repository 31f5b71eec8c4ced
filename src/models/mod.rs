// Wire models for the combined telemetry snapshot (camelCase JSON, as sent on /ws)

mod container;
mod sample;
mod system;

use serde::{Deserialize, Deserializer, Serialize};

pub use container::{Container, ContainerStatus};
pub use sample::{MemorySample, Reading, Sample, latest_value, max_value};
pub use system::{
    CpuInfo, CpuPercentages, CpuTimes, DiskInfo, MemoryInfo, NetworkInfo, ResourceData,
    SystemInfo,
};

/// One full-state frame: host metrics plus every known container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSnapshot {
    pub system_info: SystemInfo,
    #[serde(default, deserialize_with = "nullable")]
    pub containers: Vec<Container>,
}

/// Reads `null` as the type's default. The producer encodes empty slices as `null`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
