// Shared test helpers
#![allow(dead_code)]

use homeboard::models::*;

pub fn sample(value: f64, timestamp: i64) -> Sample {
    Sample::new(value, timestamp)
}

pub fn memory_sample(value: f64, total_memory: f64) -> MemorySample {
    MemorySample {
        value,
        timestamp: 0,
        is_spike: false,
        total_memory,
    }
}

pub fn container(id: &str, name: &str, status: ContainerStatus) -> Container {
    Container {
        id: id.into(),
        name: name.into(),
        status,
        ..Default::default()
    }
}

/// Container whose newest cpu/ram/rx/tx readings are the given values.
pub fn container_with_usage(
    id: &str,
    name: &str,
    status: ContainerStatus,
    cpu: f64,
    ram: f64,
    rx: f64,
    tx: f64,
) -> Container {
    Container {
        cpu_usage: vec![sample(0.0, 0), sample(cpu, 1)],
        ram_usage: vec![memory_sample(0.0, 4096.0), memory_sample(ram, 4096.0)],
        network_rx_bytes: vec![sample(rx, 1)],
        network_tx_bytes: vec![sample(tx, 1)],
        ..container(id, name, status)
    }
}

pub fn minimal_snapshot(containers: Vec<Container>) -> CombinedSnapshot {
    CombinedSnapshot {
        system_info: SystemInfo::default(),
        containers,
    }
}

/// Host snapshot with one point per resource series, as the server sends it.
pub fn host_snapshot(cpu: f64, memory: f64, total_memory: f64) -> CombinedSnapshot {
    let mut info = SystemInfo::default();
    info.resource_data.cpu = vec![sample(cpu, 1)];
    info.resource_data.network = vec![sample(2048.0, 1)];
    info.resource_data.memory = vec![MemorySample {
        timestamp: 1,
        ..memory_sample(memory, total_memory)
    }];
    info.resource_data.disk = vec![sample(40.0, 1).with_total(500_000.0)];
    info.cpu_cores = 4;
    info.total_ram = total_memory;
    CombinedSnapshot {
        system_info: info,
        containers: vec![],
    }
}
