// Container list orderings. Overview lists and card lists use different keys.

use std::cmp::Ordering;

use crate::models::Container;

/// Overview order: running first; running by latest RAM descending then id;
/// the rest by name then id.
pub fn overview_cmp(a: &Container, b: &Container) -> Ordering {
    match (a.status.is_running(), b.status.is_running()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b
            .latest_ram()
            .total_cmp(&a.latest_ram())
            .then_with(|| a.id.cmp(&b.id)),
        (false, false) => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
    }
}

/// Card order: status rank, then name.
pub fn card_cmp(a: &Container, b: &Container) -> Ordering {
    a.status
        .rank()
        .cmp(&b.status.rank())
        .then_with(|| a.name.cmp(&b.name))
}

pub fn sort_overview(containers: &mut [Container]) {
    containers.sort_by(overview_cmp);
}

pub fn sort_cards(containers: &mut [Container]) {
    containers.sort_by(card_cmp);
}

pub fn sorted_overview(containers: &[Container]) -> Vec<Container> {
    let mut out = containers.to_vec();
    sort_overview(&mut out);
    out
}

pub fn sorted_cards(containers: &[Container]) -> Vec<Container> {
    let mut out = containers.to_vec();
    sort_cards(&mut out);
    out
}
