//! Configuration loading and validation for the chirpy service.
//!
//! All values are read from environment variables at startup (after an
//! optional `.env` file has been merged into the environment). The process
//! exits with a clear error message if any variable is invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Platform marker that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

/// Validated chirpy service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Deployment platform marker. Only [`DEV_PLATFORM`] permits `/admin/reset`.
    #[serde(default)]
    pub platform: String,

    /// Postgres connection string. When absent users are kept in memory.
    #[serde(default)]
    pub db_url: Option<String>,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/app/` and `/api/assets`.
    #[serde(default = "default_fileserver_root")]
    pub fileserver_root: String,

    /// Per-request timeout enforced by the transport layer.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Optional OTLP endpoint for span export.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8080
}
fn default_fileserver_root() -> String {
    ".".into()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case outside local development.
        let _ = dotenvy::dotenv();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Whether the service runs on the development platform.
    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be a non-zero port number");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }
        if self.fileserver_root.trim().is_empty() {
            anyhow::bail!("FILESERVER_ROOT must not be empty");
        }
        if let Some(url) = &self.db_url {
            if url.trim().is_empty() {
                anyhow::bail!("DB_URL must not be empty when set");
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: String::new(),
            db_url: None,
            port: default_port(),
            fileserver_root: default_fileserver_root(),
            request_timeout_secs: default_request_timeout(),
            otel_exporter_otlp_endpoint: None,
            log_level: default_log_level(),
        }
    }
}
