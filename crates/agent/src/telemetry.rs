//! Tracing subscriber setup

use kayan_config::ObservabilityConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(config: &ObservabilityConfig) -> String {
    let level = config.log_level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        // Matches every kayan_* target by prefix
        format!("kayan={}", level)
    }
}

/// Install the global subscriber, writing to stderr so stdout stays
/// machine-readable
pub fn init_tracing(config: &ObservabilityConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_from_level() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            log_json: false,
        };
        assert_eq!(default_directive(&config), "kayan=debug");
    }

    #[test]
    fn test_full_directive_passes_through() {
        let config = ObservabilityConfig {
            log_level: "kayan_agent=trace,warn".to_string(),
            log_json: true,
        };
        assert_eq!(default_directive(&config), "kayan_agent=trace,warn");
    }
}
