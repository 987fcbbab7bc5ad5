//! Tracing subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig, ServerConfig};

use super::{ObservabilityError, settings};

/// Crates whose routine chatter stays below `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: [&str; 3] = ["h2", "hyper", "sqlx"];

/// Marker that logging is up; held for the life of the server.
#[derive(Debug)]
pub(crate) struct Observability;

impl Observability {
    /// Install the global subscriber and apply request-level settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        tracing_subscriber::registry()
            .with(format_layer(&config.logging))
            .with(env_filter(&config.logging))
            .try_init()?;

        Ok(Self)
    }
}

fn format_layer(logging: &LoggingConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    match logging.log_format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_file(logging.log_source_location)
            .with_line_number(logging.log_source_location)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
    }
}

fn default_directives(logging: &LoggingConfig) -> String {
    QUIET_TARGETS
        .iter()
        .fold(logging.log_level.clone(), |mut directives, target| {
            directives.push(',');
            directives.push_str(target);
            directives.push_str("=warn");
            directives
        })
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(logging)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noisy_crates_are_capped_at_warn() {
        let logging = LoggingConfig {
            log_level: "debug".to_string(),
            log_format: LogFormat::Compact,
            log_source_location: false,
        };

        assert_eq!(
            default_directives(&logging),
            "debug,h2=warn,hyper=warn,sqlx=warn"
        );
    }
}
