// Page URL -> snapshot socket URL. The feed lives at `/ws` on the page's host and port.

use url::Url;

use crate::error::IngestError;

pub const SNAPSHOT_PATH: &str = "/ws";

/// Secure pages (`https`) get `wss`; plain pages get `ws`. Query and fragment are dropped.
pub fn snapshot_url(page_url: &Url) -> Result<Url, IngestError> {
    let scheme = match page_url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(IngestError::UnsupportedScheme(other.to_string())),
    };
    let mut url = page_url.clone();
    url.set_scheme(scheme)
        .map_err(|_| IngestError::UnsupportedScheme(page_url.scheme().to_string()))?;
    url.set_path(SNAPSHOT_PATH);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

pub fn parse_page_url(raw: &str) -> Result<Url, IngestError> {
    Ok(Url::parse(raw)?)
}
