// Dashboard view tests: cards, scales and facts per panel

mod common;

use common::*;
use homeboard::chart::Scale;
use homeboard::dashboard::Dashboard;
use homeboard::models::ContainerStatus::*;
use homeboard::models::{CpuInfo, CpuTimes, MemoryInfo, NetworkInfo};
use homeboard::nav::Page;
use homeboard::views::*;

fn labels(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.label.as_str()).collect()
}

#[test]
fn test_system_overview_appends_newest_resource_points() {
    let mut view = SystemOverview::new(7, 0);
    view.update(&host_snapshot(25.0, 50.0, 16000.0), 1000);
    let cards = view.cards();
    assert_eq!(labels(&cards), vec!["Compute", "Network", "Memory", "Disk"]);
    assert_eq!(cards[0].value, 25.0);
    assert_eq!(cards[0].samples.len(), 3);
    assert_eq!(cards[1].scale, Scale::Fixed(2048.0 * 1.2));
    assert_eq!(cards[1].display, "2.0 KB/s");
    assert_eq!(view.total_memory(), 16000.0);
    assert_eq!(view.total_disk(), 500_000.0);

    let facts = view.facts();
    assert!(facts.iter().any(|f| f.label == "Total RAM" && f.value == "15.6 GB"));
    assert!(facts.iter().any(|f| f.label == "CPU cores" && f.value == "4"));
}

#[test]
fn test_system_overview_missing_series_reads_zero() {
    let mut view = SystemOverview::new(7, 0);
    view.update(&minimal_snapshot(vec![]), 1000);
    let cards = view.cards();
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(|c| c.value == 0.0));
    assert_eq!(cards[1].scale, Scale::Fixed(1.2));
    assert_eq!(view.cpu().latest().map(|s| s.timestamp), Some(1000));
}

#[test]
fn test_cpu_detail_caps_core_cards() {
    let mut snap = minimal_snapshot(vec![]);
    snap.system_info.cpu_cores = 16;
    snap.system_info.cpu_per_core = (0..16).map(|i| i as f64).collect();
    snap.system_info.cpu_info = Some(CpuInfo {
        model_name: "EPYC".into(),
        cpu_times: Some(CpuTimes {
            iowait: 3.0,
            steal: 1.0,
            user: 20.0,
            system: 7.0,
            ..Default::default()
        }),
        ..Default::default()
    });

    let mut view = CpuDetail::new(7, 0);
    view.update(&snap, 1000);
    let cards = view.cards();
    assert_eq!(cards.len(), 4 + MAX_DISPLAYED_CORES);
    assert_eq!(labels(&cards[..4]), vec!["IO Wait", "Steal", "User", "System"]);
    assert_eq!(cards[0].value, 3.0);
    assert_eq!(cards[0].samples.len(), 2);
    assert_eq!(cards[4 + 5].label, "Core 5");
    assert_eq!(cards[4 + 5].value, 5.0);
    assert_eq!(view.cores().cores(), 16);
}

#[test]
fn test_cpu_detail_skips_times_without_cpu_info() {
    let mut view = CpuDetail::new(7, 0);
    view.update(&minimal_snapshot(vec![]), 1000);
    assert!(view.cards().iter().all(|c| c.samples.len() == 1));
    assert!(view.facts().is_empty());
}

#[test]
fn test_memory_detail_swap_cards_only_with_swap() {
    let mut snap = minimal_snapshot(vec![]);
    snap.system_info.memory_info = Some(MemoryInfo {
        total: 0.0,
        used_percent: 30.0,
        buffers: 100.0,
        ..Default::default()
    });
    let mut view = MemoryDetail::new(7, 0);
    view.update(&snap, 1000);
    let cards = view.cards();
    assert_eq!(labels(&cards), vec!["Usage", "Free", "Buffered", "Cached"]);
    assert_eq!(cards[1].value, 70.0);
    assert_eq!(view.buffers().latest_value(), 0.0);

    snap.system_info.memory_info = Some(MemoryInfo {
        total: 1000.0,
        buffers: 100.0,
        swap_total: 200.0,
        swap_used: 50.0,
        ..Default::default()
    });
    view.update(&snap, 2000);
    assert_eq!(view.cards().len(), 6);
    assert_eq!(view.buffers().latest_value(), 10.0);
    assert_eq!(view.swap_used().latest_value(), 25.0);
}

#[test]
fn test_network_and_disk_scales() {
    let mut snap = minimal_snapshot(vec![]);
    snap.system_info.network_info = Some(NetworkInfo {
        total_bytes_sent: 1.0,
        total_bytes_recv: 2.0,
    });
    snap.system_info.bytes_recv_per_second = 1000.0;
    snap.system_info.bytes_sent_per_second = 0.5;

    let mut net = NetworkDetail::new(7, 0);
    net.update(&snap, 1000);
    let cards = net.cards();
    assert_eq!(cards[0].scale, Scale::Fixed(1000.0 * 1.15));
    assert_eq!(cards[1].scale, Scale::Fixed(1.15));

    let mut disk = DiskDetail::new(7, 0);
    disk.update(&snap, 1000);
    assert_eq!(disk.cards()[1].scale, Scale::Fixed(1.0));
}

#[test]
fn test_overview_and_coolify_scenario() {
    let snap = minimal_snapshot(vec![
        container_with_usage("a", "web", Running, 10.0, 500.0, 0.0, 0.0),
        container_with_usage("b", "coolify-db", Running, 5.0, 900.0, 0.0, 0.0),
    ]);

    let mut overview = ContainersOverview::new(7, 0);
    overview.update(&snap, 1000);
    let order: Vec<String> = overview.entries().into_iter().map(|e| e.id).collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(overview.ram().latest_value(), 1400.0);

    let mut coolify = CoolifyOverview::new(7, 0);
    coolify.update(&snap, 1000);
    let ids: Vec<&str> = coolify.containers().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
    let cards = coolify.cards();
    assert_eq!(cards[0].value, 5.0);
    assert_eq!(cards[2].value, 900.0);
    // no disk total reported: 10000 MB bound
    assert_eq!(cards[3].scale, Scale::Fixed(10_000.0));
}

#[test]
fn test_containers_overview_remembers_total_memory() {
    let mut overview = ContainersOverview::new(7, 0);
    overview.update(&host_snapshot(1.0, 1.0, 8192.0), 1000);
    overview.update(&minimal_snapshot(vec![]), 2000);
    assert_eq!(overview.total_memory(), 8192.0);
    assert_eq!(overview.cards()[1].scale, Scale::Fixed(8192.0));
}

#[test]
fn test_coolify_keeps_total_memory_when_snapshot_omits_it() {
    let db = container_with_usage("b", "coolify-db", Running, 5.0, 900.0, 0.0, 0.0);
    let mut first = host_snapshot(1.0, 1.0, 8192.0);
    first.containers = vec![db.clone()];

    let mut coolify = CoolifyOverview::new(7, 0);
    coolify.update(&first, 1000);
    coolify.update(&minimal_snapshot(vec![db]), 2000);

    let cards = coolify.cards();
    assert_eq!(cards[2].scale, Scale::Fixed(8192.0));
    assert_eq!(cards[2].samples.last().and_then(|s| s.total), Some(8192.0));
}

#[test]
fn test_container_cards_follow_status_rank() {
    let snap = minimal_snapshot(vec![
        container("1", "zeta", Exited),
        container("2", "alpha", Restarting),
        container_with_usage("3", "beta", Running, 1.0, 2.0, 3.0, 4.0),
    ]);
    let mut overview = ContainersOverview::new(7, 0);
    overview.update(&snap, 1000);
    let cards = overview.container_cards(1000);
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["beta", "alpha", "zeta"]);
    assert_eq!(cards[0].tone, Tone::Ok);
    assert_eq!(cards[1].tone, Tone::Warn);
    assert!(cards[2].offline);
    assert_eq!(cards[0].cards[1].scale, Scale::Fixed(4096.0));
    assert_eq!(cards[0].cards[2].scale, Scale::Fixed(4.0 * 1.2));
}

#[test]
fn test_dashboard_sections_per_page() {
    let mut board = Dashboard::new(7, 0);
    board.apply(&host_snapshot(10.0, 20.0, 4096.0), 1000);
    board.apply(&host_snapshot(30.0, 40.0, 4096.0), 2000);
    assert_eq!(board.applied(), 2);

    let titles: Vec<&str> = board.sections(Page::System).iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["System Overview", "CPU", "Memory", "Network", "Disk"]);
    assert_eq!(board.sections(Page::Containers)[0].title, "Containers");
    assert_eq!(board.sections(Page::Coolify)[0].title, "Coolify");

    // every view keeps updating even while another page is shown
    assert_eq!(board.containers().cpu().len(), 4);
    assert_eq!(board.system().cpu().values(), vec![0.0, 0.0, 10.0, 30.0]);
}
