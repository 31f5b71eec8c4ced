use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub reconnect: ReconnectConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Dashboard page URL (http/https/ws/wss); the snapshot socket is `/ws` on its host.
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReconnectConfig {
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    /// 0 retries forever.
    pub max_attempts: u32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 3000,
            max_delay_ms: 30_000,
            max_attempts: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Samples kept per metric stream.
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: crate::window::DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let dims = crate::chart::Dimensions::default();
        Self {
            width: dims.width,
            height: dims.height,
        }
    }
}

impl ChartConfig {
    pub fn dimensions(&self) -> crate::chart::Dimensions {
        crate::chart::Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// How often to log ingest stats (frames, drops, reconnects) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.server.url.is_empty(), "server.url must be non-empty");
        crate::endpoint::parse_page_url(&self.server.url)
            .and_then(|page| crate::endpoint::snapshot_url(&page))
            .map_err(|e| anyhow::anyhow!("server.url is invalid: {e}"))?;
        anyhow::ensure!(
            self.reconnect.initial_delay_ms > 0,
            "reconnect.initial_delay_ms must be > 0, got {}",
            self.reconnect.initial_delay_ms
        );
        anyhow::ensure!(
            self.reconnect.max_delay_ms >= self.reconnect.initial_delay_ms,
            "reconnect.max_delay_ms must be >= initial_delay_ms ({}), got {}",
            self.reconnect.initial_delay_ms,
            self.reconnect.max_delay_ms
        );
        anyhow::ensure!(
            self.window.capacity >= 2,
            "window.capacity must be >= 2, got {}",
            self.window.capacity
        );
        anyhow::ensure!(
            self.chart.width > 0.0 && self.chart.height > 0.0,
            "chart.width and chart.height must be > 0, got {}x{}",
            self.chart.width,
            self.chart.height
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
