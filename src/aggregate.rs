// Cross-container totals and capacity-relative scaling.
// Totals sum the newest sample of each matching container, never whole windows.

use crate::models::Container;

/// Case-insensitive name marker for the Coolify sub-dashboard.
pub const COOLIFY_MARKER: &str = "coolify";

/// Sum of the latest per-container readings over some subset of containers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerTotals {
    /// CPU percent.
    pub cpu: f64,
    /// RAM in MB.
    pub ram: f64,
    /// Receive rate, bytes per second.
    pub network_rx: f64,
    /// Transmit rate, bytes per second.
    pub network_tx: f64,
    pub members: usize,
}

impl ContainerTotals {
    /// Combined receive + transmit rate.
    pub fn network(&self) -> f64 {
        self.network_rx + self.network_tx
    }
}

/// Totals over the containers accepted by `predicate`.
pub fn totals_where<'a, I, F>(containers: I, predicate: F) -> ContainerTotals
where
    I: IntoIterator<Item = &'a Container>,
    F: Fn(&Container) -> bool,
{
    containers
        .into_iter()
        .filter(|c| predicate(c))
        .fold(ContainerTotals::default(), |mut acc, c| {
            acc.cpu += c.latest_cpu();
            acc.ram += c.latest_ram();
            acc.network_rx += c.latest_rx();
            acc.network_tx += c.latest_tx();
            acc.members += 1;
            acc
        })
}

/// Totals over every container.
pub fn totals(containers: &[Container]) -> ContainerTotals {
    totals_where(containers, |_| true)
}

pub fn is_coolify(container: &Container) -> bool {
    container.name.to_lowercase().contains(COOLIFY_MARKER)
}

/// `value / total * 100`, or 0 when `total` is not a positive finite number.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// `total` when usable as a scale bound, otherwise `fallback`.
pub fn non_zero_or(total: f64, fallback: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        total
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent_of(512.0, 0.0), 0.0);
        assert_eq!(percent_of(512.0, f64::NAN), 0.0);
        assert_eq!(percent_of(25.0, 200.0), 12.5);
    }

    #[test]
    fn non_zero_or_substitutes_fallback() {
        assert_eq!(non_zero_or(0.0, 1.0), 1.0);
        assert_eq!(non_zero_or(-3.0, 1.0), 1.0);
        assert_eq!(non_zero_or(8192.0, 1.0), 8192.0);
    }
}
