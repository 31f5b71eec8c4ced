// Snapshot ingestion: one WebSocket to the server's `/ws` feed, each frame a full
// CombinedSnapshot. The newest good snapshot lives in a watch cell; bad frames are
// dropped and the previous snapshot stays current. Connection loss reconnects with
// bounded exponential backoff and leaves all downstream state intact.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::StreamExt;
use tokio::sync::{oneshot, watch};
use tokio::time::Duration;
use tokio_tungstenite::tungstenite::Message;
use tracing::Instrument;
use url::Url;

use crate::config::ReconnectConfig;
use crate::error::IngestError;
use crate::models::CombinedSnapshot;

type Slot = Option<Arc<CombinedSnapshot>>;

/// Creates the cell: the publisher goes to the ingest task, the cell to readers.
pub fn snapshot_channel() -> (SnapshotPublisher, SnapshotCell) {
    let (tx, rx) = watch::channel(None);
    (SnapshotPublisher { tx }, SnapshotCell { rx })
}

/// Write side of the snapshot cell. Only the ingest task holds one.
#[derive(Debug)]
pub struct SnapshotPublisher {
    tx: watch::Sender<Slot>,
}

impl SnapshotPublisher {
    /// Replaces the current snapshot. Succeeds with or without readers.
    pub fn publish(&self, snapshot: CombinedSnapshot) {
        self.tx.send_replace(Some(Arc::new(snapshot)));
    }

    pub fn subscribe(&self) -> SnapshotCell {
        SnapshotCell {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read side of the snapshot cell. Readers that fall behind skip straight to the
/// newest snapshot; they never observe an older one after a newer one.
#[derive(Debug, Clone)]
pub struct SnapshotCell {
    rx: watch::Receiver<Slot>,
}

impl SnapshotCell {
    /// Current snapshot, `None` until the first good frame.
    pub fn latest(&self) -> Option<Arc<CombinedSnapshot>> {
        self.rx.borrow().clone()
    }

    /// Waits for a snapshot newer than the last one seen. `None` once the publisher is gone.
    pub async fn changed(&mut self) -> Option<Arc<CombinedSnapshot>> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(snapshot) = self.rx.borrow_and_update().clone() {
                return Some(snapshot);
            }
        }
    }
}

pub fn parse_frame(text: &str) -> Result<CombinedSnapshot, IngestError> {
    Ok(serde_json::from_str(text)?)
}

/// Delay schedule between connection attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// 0 retries forever.
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::from(&ReconnectConfig::default())
    }
}

impl From<&ReconnectConfig> for ReconnectPolicy {
    fn from(c: &ReconnectConfig) -> Self {
        Self {
            initial_delay: Duration::from_millis(c.initial_delay_ms),
            max_delay: Duration::from_millis(c.max_delay_ms),
            max_attempts: c.max_attempts,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before retry `attempt` (1-based): `initial * 2^(attempt-1)`, capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(31);
        self.initial_delay
            .saturating_mul(1u32 << shift)
            .min(self.max_delay)
    }

    /// True once `attempt` is past the configured limit.
    pub fn exhausted(&self, attempt: u32) -> bool {
        self.max_attempts != 0 && attempt > self.max_attempts
    }
}

/// Ingest counters, shared with the stats logger.
#[derive(Debug, Default)]
pub struct IngestStats {
    frames_received: AtomicU64,
    frames_dropped: AtomicU64,
    connections: AtomicU64,
    reconnect_attempts: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestCounters {
    pub frames_received: u64,
    pub frames_dropped: u64,
    pub connections: u64,
    pub reconnect_attempts: u64,
}

impl IngestStats {
    pub fn counters(&self) -> IngestCounters {
        IngestCounters {
            frames_received: self.frames_received.load(Ordering::Relaxed),
            frames_dropped: self.frames_dropped.load(Ordering::Relaxed),
            connections: self.connections.load(Ordering::Relaxed),
            reconnect_attempts: self.reconnect_attempts.load(Ordering::Relaxed),
        }
    }
}

pub struct Ingestor {
    endpoint: Url,
    policy: ReconnectPolicy,
    publisher: SnapshotPublisher,
    stats: Arc<IngestStats>,
}

impl Ingestor {
    pub fn new(endpoint: Url, policy: ReconnectPolicy, publisher: SnapshotPublisher) -> Self {
        Self {
            endpoint,
            policy,
            publisher,
            stats: Arc::new(IngestStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<IngestStats> {
        self.stats.clone()
    }

    pub fn subscribe(&self) -> SnapshotCell {
        self.publisher.subscribe()
    }

    /// Runs until `shutdown` fires (Ok) or the retry limit is hit (`RetriesExhausted`).
    pub async fn run(self, shutdown: oneshot::Receiver<()>) -> Result<(), IngestError> {
        let span = tracing::debug_span!("ingest", endpoint = %self.endpoint);
        self.run_loop(shutdown).instrument(span).await
    }

    async fn run_loop(self, mut shutdown: oneshot::Receiver<()>) -> Result<(), IngestError> {
        let mut failures: u32 = 0;

        loop {
            let outcome = tokio::select! {
                r = self.session(&mut failures) => r,
                _ = &mut shutdown => {
                    tracing::info!("Ingestor shutting down");
                    return Ok(());
                }
            };
            match outcome {
                Ok(()) => tracing::info!("Snapshot feed closed by server"),
                Err(e) => tracing::warn!(
                    error = %e,
                    operation = "snapshot_session",
                    "Snapshot feed failed"
                ),
            }

            failures = failures.saturating_add(1);
            if self.policy.exhausted(failures) {
                tracing::error!(
                    attempts = self.policy.max_attempts,
                    "Giving up on snapshot feed"
                );
                return Err(IngestError::RetriesExhausted(self.policy.max_attempts));
            }
            let delay = self.policy.delay_for(failures);
            tracing::info!(
                attempt = failures,
                delay_ms = delay.as_millis() as u64,
                "Reconnecting to snapshot feed"
            );
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut shutdown => {
                    tracing::info!("Ingestor shutting down");
                    return Ok(());
                }
            }
            self.stats.reconnect_attempts.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// One connection: connect, pump frames until close or error, then drop the socket.
    async fn session(&self, failures: &mut u32) -> Result<(), IngestError> {
        let (mut ws, _) = tokio_tungstenite::connect_async(self.endpoint.as_str()).await?;
        *failures = 0;
        self.stats.connections.fetch_add(1, Ordering::Relaxed);
        tracing::info!(url = %self.endpoint, "Connected to snapshot feed");

        let result = loop {
            let Some(msg) = ws.next().await else {
                break Ok(());
            };
            match msg {
                Ok(Message::Text(text)) => self.handle_frame(&text),
                Ok(Message::Binary(data)) => match std::str::from_utf8(&data) {
                    Ok(text) => self.handle_frame(text),
                    Err(e) => {
                        self.stats.frames_received.fetch_add(1, Ordering::Relaxed);
                        self.stats.frames_dropped.fetch_add(1, Ordering::Relaxed);
                        tracing::warn!(error = %e, "Dropping non-UTF-8 binary frame");
                    }
                },
                Ok(Message::Close(frame)) => {
                    tracing::debug!(?frame, "Close frame received");
                    break Ok(());
                }
                Ok(_) => {}
                Err(e) => break Err(IngestError::from(e)),
            }
        };
        let _ = ws.close(None).await;
        result
    }

    fn handle_frame(&self, text: &str) {
        self.stats.frames_received.fetch_add(1, Ordering::Relaxed);
        match parse_frame(text) {
            Ok(snapshot) => {
                tracing::trace!(
                    containers = snapshot.containers.len(),
                    "Snapshot received"
                );
                self.publisher.publish(snapshot);
            }
            Err(e) => {
                self.stats.frames_dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    error = %e,
                    operation = "parse_frame",
                    "Dropping malformed snapshot frame"
                );
            }
        }
    }
}

/// Spawns the ingest task. Send on the paired oneshot to stop it.
pub fn spawn(
    ingestor: Ingestor,
    shutdown_rx: oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<Result<(), IngestError>> {
    tokio::spawn(ingestor.run(shutdown_rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_then_caps() {
        let p = ReconnectPolicy {
            initial_delay: Duration::from_millis(3000),
            max_delay: Duration::from_millis(20_000),
            max_attempts: 0,
        };
        assert_eq!(p.delay_for(1), Duration::from_millis(3000));
        assert_eq!(p.delay_for(2), Duration::from_millis(6000));
        assert_eq!(p.delay_for(3), Duration::from_millis(12_000));
        assert_eq!(p.delay_for(4), Duration::from_millis(20_000));
        assert_eq!(p.delay_for(200), Duration::from_millis(20_000));
    }

    #[test]
    fn zero_max_attempts_never_exhausts() {
        let p = ReconnectPolicy::default();
        assert!(!p.exhausted(u32::MAX));
        let p = ReconnectPolicy {
            max_attempts: 2,
            ..p
        };
        assert!(!p.exhausted(2));
        assert!(p.exhausted(3));
    }

    #[tokio::test]
    async fn cell_keeps_only_newest() {
        let (publisher, mut cell) = snapshot_channel();
        assert!(cell.latest().is_none());
        let first = parse_frame(r#"{"systemInfo":{"uptime":1}}"#).unwrap();
        let second = parse_frame(r#"{"systemInfo":{"uptime":2}}"#).unwrap();
        publisher.publish(first);
        publisher.publish(second);
        let seen = cell.changed().await.unwrap();
        assert_eq!(seen.system_info.uptime, 2);
        drop(publisher);
        assert!(cell.changed().await.is_none());
    }

    #[tokio::test]
    async fn every_reader_sees_the_newest_snapshot() {
        let (publisher, first) = snapshot_channel();
        let mut second = publisher.subscribe();
        let ingestor = Ingestor::new(
            Url::parse("ws://127.0.0.1:9/ws").unwrap(),
            ReconnectPolicy::default(),
            publisher,
        );
        let mut third = ingestor.subscribe();

        ingestor
            .publisher
            .publish(parse_frame(r#"{"systemInfo":{"uptime":7}}"#).unwrap());

        assert_eq!(second.changed().await.unwrap().system_info.uptime, 7);
        assert_eq!(third.changed().await.unwrap().system_info.uptime, 7);
        assert_eq!(first.latest().unwrap().system_info.uptime, 7);
    }
}
