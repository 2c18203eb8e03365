//! CLI configuration (env-driven).

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;

/// Runtime configuration read from `OID_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (off, trace, debug, info, warn, error).
    pub log_level: LevelFilter,

    /// Emit logs as JSON lines.
    pub log_json: bool,

    /// Host name fed to the fingerprint instead of the machine's own.
    pub hostname: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level: LevelFilter = lookup("OID_LOG_LEVEL")
            .map(|v| v.parse())
            .transpose()
            .context("OID_LOG_LEVEL must be one of off, error, warn, info, debug, trace.")?
            .unwrap_or(LevelFilter::WARN);

        let log_json = lookup("OID_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // An empty override is meaningful (it hashes to 0), so keep it.
        let hostname = lookup("OID_HOSTNAME");

        Ok(Self {
            log_level,
            log_json,
            hostname,
        })
    }
}
