use crate::config::TelemetryConfig;
use std::fmt;
use tracing::info;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Where the active log filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterSource {
    RustLog,
    AppLogLevel,
}

impl FilterSource {
    const fn variable(self) -> &'static str {
        match self {
            FilterSource::RustLog => "RUST_LOG",
            FilterSource::AppLogLevel => "APP_LOG_LEVEL",
        }
    }
}

/// Resolve the filter from `RUST_LOG`, falling back to the configured level.
fn env_filter(config: &TelemetryConfig) -> Result<(EnvFilter, FilterSource), TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok((filter, FilterSource::RustLog)),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map(|filter| (filter, FilterSource::AppLogLevel))
            .map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            }),
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let (env_filter, source) = env_filter(config)?;
    let directives = env_filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    info!(
        filter_source = source.variable(),
        filter = %directives,
        "log filter installed"
    );
    Ok(())
}
