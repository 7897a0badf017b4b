//! Configuration schemas.
//!
//! Deserialized via the `config` crate from an optional TOML file overlaid
//! with `ENTITYHOOKS__*` environment variables.

pub mod hooks;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::hooks::HooksConfig;
use self::logging::LoggingConfig;

use crate::error::HookError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ENTITYHOOKS";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hook discovery settings.
    #[serde(default)]
    pub hooks: HooksConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// A missing file is not an error; every section has defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, HookError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.logging.validate()?;
        Ok(app)
    }
}
