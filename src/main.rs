use anyhow::Result;
use homeboard::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app_config = config::AppConfig::load()?;
    if let Some(url) = std::env::args().nth(1) {
        app_config.server.url = url;
        app_config.validate()?;
    }

    let page_url = endpoint::parse_page_url(&app_config.server.url)?;
    let socket_url = endpoint::snapshot_url(&page_url)?;
    let page = nav::Page::from_url(&page_url);
    let dims = app_config.chart.dimensions();
    tracing::info!(
        url = %socket_url,
        page = page.as_str(),
        "Starting {}",
        version::banner()
    );

    let (publisher, mut cell) = ingest::snapshot_channel();
    let ingestor = ingest::Ingestor::new(
        socket_url,
        ingest::ReconnectPolicy::from(&app_config.reconnect),
        publisher,
    );
    let stats = ingestor.stats();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let mut ingest_handle = ingest::spawn(ingestor, shutdown_rx);

    let mut board = dashboard::Dashboard::new(app_config.window.capacity, dashboard::now_ms());
    let mut stats_tick = tokio::time::interval(tokio::time::Duration::from_secs(
        app_config.monitoring.stats_log_interval_secs,
    ));
    stats_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            snapshot = cell.changed() => {
                let Some(snapshot) = snapshot else { break };
                let now = dashboard::now_ms();
                board.apply(&snapshot, now);
                print!("\x1b[2J\x1b[H{}", render::render_page(&board, page, dims, now));
            }
            _ = stats_tick.tick() => {
                let c = stats.counters();
                tracing::info!(
                    frames_received = c.frames_received,
                    frames_dropped = c.frames_dropped,
                    connections = c.connections,
                    reconnect_attempts = c.reconnect_attempts,
                    snapshots_applied = board.applied(),
                    "App stats"
                );
            }
            result = &mut ingest_handle => {
                return match result {
                    Ok(r) => r.map_err(Into::into),
                    Err(e) => Err(anyhow::anyhow!("ingest task: {e}")),
                };
            }
            _ = &mut shutdown => {
                tracing::info!("Received shutdown signal");
                let _ = shutdown_tx.send(());
                let _ = ingest_handle.await;
                return Ok(());
            }
        }
    }

    // Publisher dropped: the ingest task has ended, surface its result.
    match ingest_handle.await {
        Ok(r) => Ok(r?),
        Err(e) => Err(anyhow::anyhow!("ingest task: {e}")),
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
