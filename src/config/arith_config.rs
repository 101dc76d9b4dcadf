// src/config/arith_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// How the service treats integer overflow when evaluating operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, never reported
    #[default]
    Wrapping,
    /// Overflow is reported as `ArithmeticError::Overflow`
    Checked,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Overflow handling for `ArithmeticService::evaluate`
    pub overflow: OverflowPolicy,
}

impl Default for ArithConfig {
    fn default() -> Self {
        ArithConfig {
            log_level: "info".to_string(),
            overflow: OverflowPolicy::Wrapping,
        }
    }
}

impl ArithConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("arith.toml").exists() {
            builder = builder.add_source(File::with_name("arith.toml"));
        } else if Path::new("arith.yaml").exists() {
            builder = builder.add_source(File::with_name("arith.yaml"));
        }

        Self::finish(builder.add_source(Self::environment()))
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder.add_source(Self::environment()))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("overflow", "wrapping")
    }

    // ARITH_LOG_LEVEL, ARITH_OVERFLOW
    fn environment() -> Environment {
        Environment::with_prefix("ARITH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder.build()?;
        config.try_deserialize()
    }
}
