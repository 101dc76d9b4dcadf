// src/logging.rs

use env_logger::Env;
use log::SetLoggerError;
use crate::config::ArithConfig;

/// Install env_logger as the global logger.
///
/// `ARITH_LOG` overrides the configured level. Fails only if a logger is
/// already installed, which callers may ignore.
pub fn init_logging(config: &ArithConfig) -> Result<(), SetLoggerError> {
    let env = Env::default()
        .filter_or("ARITH_LOG", config.log_level.as_str())
        .write_style_or("ARITH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = ArithConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
