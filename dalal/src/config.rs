//! Service configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use dalal_core::ResolutionMode;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override file settings (`DALAL_PORT=8080`).
pub const ENV_PREFIX: &str = "DALAL";

/// Runtime configuration of the dalal HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory of a prebuilt frontend served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Substitute defaults for unknown inputs, or report them.
    pub resolution: ResolutionMode,
    /// Exchange timezone; "now" for sampling and news dates is read in it.
    pub timezone: Tz,
    /// Seed for a reproducible RNG. Fresh entropy per call when absent.
    pub seed: Option<u64>,
    /// Attach a permissive CORS layer.
    pub cors: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
            resolution: ResolutionMode::Lenient,
            timezone: chrono_tz::Asia::Kolkata,
            seed: None,
            cors: true,
        }
    }
}

impl ServiceConfig {
    /// Load from an optional TOML file, then apply `DALAL_*` environment overrides.
    ///
    /// Keys missing from every source keep their default values.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// `host:port`, suitable for binding.
    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
