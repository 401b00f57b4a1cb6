pub mod log;
pub mod noop;
pub mod traits;

pub use self::log::LogObserver;
pub use noop::NoopObserver;
pub use traits::{Observer, ObserverEvent};

use crate::config::ObservabilityConfig;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Factory: create the right observer from config
pub fn create_observer(config: &ObservabilityConfig) -> Arc<dyn Observer> {
    match config.backend.as_str() {
        "log" => Arc::new(LogObserver::new()),
        "none" | "noop" => Arc::new(NoopObserver),
        _ => {
            tracing::warn!(
                "Unknown observability backend '{}', falling back to noop",
                config.backend
            );
            Arc::new(NoopObserver)
        }
    }
}

/// Max log level from config; unknown names fall back to `info`.
pub fn log_level(config: &ObservabilityConfig) -> Level {
    Level::from_str(config.log_level.trim()).unwrap_or(Level::INFO)
}

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(config))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(backend: &str, log_level: &str) -> ObservabilityConfig {
        ObservabilityConfig {
            backend: backend.into(),
            log_level: log_level.into(),
        }
    }

    #[test]
    fn factory_none_returns_noop() {
        assert_eq!(create_observer(&cfg("none", "info")).name(), "noop");
    }

    #[test]
    fn factory_noop_returns_noop() {
        assert_eq!(create_observer(&cfg("noop", "info")).name(), "noop");
    }

    #[test]
    fn factory_log_returns_log() {
        assert_eq!(create_observer(&cfg("log", "info")).name(), "log");
    }

    #[test]
    fn factory_unknown_falls_back_to_noop() {
        assert_eq!(create_observer(&cfg("xyzzy_unknown", "info")).name(), "noop");
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(log_level(&cfg("none", "DEBUG")), Level::DEBUG);
        assert_eq!(log_level(&cfg("none", "warn")), Level::WARN);
    }

    #[test]
    fn log_level_unknown_falls_back_to_info() {
        assert_eq!(log_level(&cfg("none", "chatty")), Level::INFO);
    }
}
