// Build metadata from Cargo.toml

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `name vversion`, used in the startup log line.
pub fn banner() -> String {
    format!("{NAME} v{VERSION}")
}
