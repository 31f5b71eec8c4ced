// Ingestion tests against an in-process WebSocket server

use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use homeboard::endpoint::snapshot_url;
use homeboard::error::IngestError;
use homeboard::ingest::{Ingestor, ReconnectPolicy, snapshot_channel};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, timeout};
use url::Url;

const BAD_FRAME: &str = "{not json";
const GOOD_FRAME: &str = r#"{"systemInfo":{"uptime":42,"cpuCores":2},"containers":null}"#;

#[derive(Clone)]
struct Feed {
    frames: Arc<Vec<Message>>,
    connections: Arc<AtomicUsize>,
}

async fn feed_handler(ws: WebSocketUpgrade, State(feed): State<Feed>) -> impl IntoResponse {
    feed.connections.fetch_add(1, Ordering::SeqCst);
    ws.on_upgrade(move |socket| send_frames(socket, feed))
}

/// Sends every frame, then closes the connection.
async fn send_frames(mut socket: WebSocket, feed: Feed) {
    for frame in feed.frames.iter() {
        if socket.send(frame.clone()).await.is_err() {
            return;
        }
    }
    let _ = socket.send(Message::Close(None)).await;
}

async fn start_feed(frames: Vec<Message>) -> (SocketAddr, Arc<AtomicUsize>) {
    let connections = Arc::new(AtomicUsize::new(0));
    let feed = Feed {
        frames: Arc::new(frames),
        connections: connections.clone(),
    };
    let app = Router::new()
        .route("/ws", get(feed_handler))
        .with_state(feed);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, connections)
}

fn endpoint(addr: SocketAddr) -> Url {
    let page = Url::parse(&format!("http://{addr}/?page=system")).unwrap();
    snapshot_url(&page).unwrap()
}

fn fast_policy(max_attempts: u32) -> ReconnectPolicy {
    ReconnectPolicy {
        initial_delay: Duration::from_millis(20),
        max_delay: Duration::from_millis(80),
        max_attempts,
    }
}

#[tokio::test]
async fn test_malformed_frame_is_dropped_and_next_one_published() {
    let (addr, _) = start_feed(vec![
        Message::Text(BAD_FRAME.into()),
        Message::Text(GOOD_FRAME.into()),
    ])
    .await;
    let (publisher, mut cell) = snapshot_channel();
    let ingestor = Ingestor::new(endpoint(addr), fast_policy(0), publisher);
    let stats = ingestor.stats();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(ingestor.run(shutdown_rx));

    let snap = timeout(Duration::from_secs(5), cell.changed())
        .await
        .expect("snapshot in time")
        .expect("publisher alive");
    assert_eq!(snap.system_info.uptime, 42);
    assert!(snap.containers.is_empty());

    let c = stats.counters();
    assert!(c.frames_dropped >= 1);
    assert!(c.frames_received >= 2);

    shutdown_tx.send(()).unwrap();
    let result = timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_binary_frames_are_decoded() {
    let (addr, _) = start_feed(vec![Message::Binary(GOOD_FRAME.as_bytes().to_vec().into())]).await;
    let (publisher, mut cell) = snapshot_channel();
    let ingestor = Ingestor::new(endpoint(addr), fast_policy(0), publisher);
    let (_shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    tokio::spawn(ingestor.run(shutdown_rx));

    let snap = timeout(Duration::from_secs(5), cell.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snap.system_info.cpu_cores, 2);
}

#[tokio::test]
async fn test_reconnects_after_close_and_keeps_last_snapshot() {
    let (addr, connections) = start_feed(vec![Message::Text(GOOD_FRAME.into())]).await;
    let (publisher, mut cell) = snapshot_channel();
    let ingestor = Ingestor::new(endpoint(addr), fast_policy(0), publisher);
    let stats = ingestor.stats();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = tokio::spawn(ingestor.run(shutdown_rx));

    timeout(Duration::from_secs(5), cell.changed())
        .await
        .unwrap()
        .unwrap();

    timeout(Duration::from_secs(5), async {
        while connections.load(Ordering::SeqCst) < 3 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("client reconnected");

    assert!(cell.latest().is_some());
    assert!(stats.counters().reconnect_attempts >= 2);

    shutdown_tx.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_gives_up_after_max_attempts() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (publisher, cell) = snapshot_channel();
    let ingestor = Ingestor::new(endpoint(addr), fast_policy(2), publisher);
    let stats = ingestor.stats();
    let (_shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let result = timeout(Duration::from_secs(5), ingestor.run(shutdown_rx))
        .await
        .expect("run finished");
    assert!(matches!(result, Err(IngestError::RetriesExhausted(2))));
    assert_eq!(stats.counters().reconnect_attempts, 2);
    assert_eq!(stats.counters().connections, 0);
    assert!(cell.latest().is_none());
}
