// Ingestion error taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("unsupported url scheme `{0}` (expected http, https, ws or wss)")]
    UnsupportedScheme(String),

    #[error("transport: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("malformed snapshot frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("gave up after {0} consecutive failed connection attempts")]
    RetriesExhausted(u32),
}
