//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Error from reading server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`SCHEDULER_ADDR`).
    pub addr: SocketAddr,

    /// Directory served under `/static` (`SCHEDULER_STATIC_DIR`).
    pub static_dir: PathBuf,

    /// Seed for fallback passenger counts (`SCHEDULER_SEED`).
    /// Unset means runs are not reproducible.
    pub seed: Option<u64>,

    /// Demand file loaded at startup (`SCHEDULER_DEMAND_CSV`).
    pub demand_csv: Option<PathBuf>,

    /// Pause before each scheduling run (`SCHEDULER_PROCESSING_DELAY_MS`).
    pub processing_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("schedule-server/static"),
            seed: None,
            demand_csv: None,
            processing_delay: Duration::from_millis(500),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("SCHEDULER_ADDR") {
            config.addr = parse("SCHEDULER_ADDR", &addr)?;
        }
        if let Some(dir) = get("SCHEDULER_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(seed) = get("SCHEDULER_SEED") {
            config.seed = Some(parse("SCHEDULER_SEED", &seed)?);
        }
        if let Some(path) = get("SCHEDULER_DEMAND_CSV") {
            config.demand_csv = Some(PathBuf::from(path));
        }
        if let Some(ms) = get("SCHEDULER_PROCESSING_DELAY_MS") {
            config.processing_delay =
                Duration::from_millis(parse("SCHEDULER_PROCESSING_DELAY_MS", &ms)?);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        name,
        value: value.to_string(),
    })
}
