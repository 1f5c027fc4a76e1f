// Logging powered by tracing-subscriber.
//
// `tracing_log::LogTracer` routes `log::*` records (ours and actix's access
// logger) into the same subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
}

/// Crates whose internals are capped unless the filter names them.
const NOISY_TARGETS: &[(&str, &str)] = &[("actix_server", "warn"), ("actix_http", "warn")];

/// Build the filter from the configured base directive plus the noisy
/// target caps. Targets the caller mentions explicitly keep their level.
pub fn build_env_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    let mut directives = vec![filter.to_string()];
    for (target, level) in NOISY_TARGETS {
        if !filter.contains(target) {
            directives.push(format!("{}={}", target, level));
        }
    }

    let joined = directives.join(",");
    EnvFilter::try_new(&joined).map_err(|source| LoggingError::InvalidFilter {
        filter: joined,
        source,
    })
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(filter: &str) -> Result<(), LoggingError> {
    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return Ok(());
    }

    // Bridge `log` crate -> tracing
    tracing_log::LogTracer::init().ok();

    tracing::debug!("Logging initialized: filter={}", filter);
    Ok(())
}
