// Scalar observations carried inside metric series

use serde::{Deserialize, Serialize};

/// One observation of a metric at a point in time (timestamp in epoch ms).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_spike: bool,
    /// Capacity context attached by the producer (e.g. disk total in MB).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl Sample {
    pub fn new(value: f64, timestamp: i64) -> Self {
        Self {
            value,
            timestamp,
            is_spike: false,
            total: None,
        }
    }

    pub fn zero(timestamp: i64) -> Self {
        Self::new(0.0, timestamp)
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn spike(mut self) -> Self {
        self.is_spike = true;
        self
    }
}

/// Memory observation; `total_memory` is the capacity (MB) at sample time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySample {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_spike: bool,
    #[serde(default)]
    pub total_memory: f64,
}

impl From<MemorySample> for Sample {
    fn from(m: MemorySample) -> Self {
        Sample {
            value: m.value,
            timestamp: m.timestamp,
            is_spike: m.is_spike,
            total: Some(m.total_memory),
        }
    }
}

/// Anything that carries a scalar value.
pub trait Reading {
    fn value(&self) -> f64;
}

impl Reading for Sample {
    fn value(&self) -> f64 {
        self.value
    }
}

impl Reading for MemorySample {
    fn value(&self) -> f64 {
        self.value
    }
}

impl Reading for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

/// Value of the last element, or 0 when the series is empty.
pub fn latest_value<R: Reading>(series: &[R]) -> f64 {
    series.last().map(Reading::value).unwrap_or(0.0)
}

/// Largest value in the series, never below `floor`.
pub fn max_value<R: Reading>(series: &[R], floor: f64) -> f64 {
    series.iter().map(Reading::value).fold(floor, f64::max)
}
