//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! use barbershop_types::config::LogFormat;
//!
//! // Human-readable output at info level unless RUST_LOG says otherwise
//! barbershop_observe::tracing_setup::init_tracing("info", LogFormat::Pretty).unwrap();
//! ```

use barbershop_types::config::LogFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// - `default_filter` applies when `RUST_LOG` is unset or invalid.
/// - `LogFormat::Pretty` installs the `fmt` layer with targets;
///   `LogFormat::Json` emits one JSON object per event.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(
    default_filter: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = build_filter(default_filter);

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }

    Ok(())
}

/// `RUST_LOG` if set and valid, otherwise `default_filter`.
fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Map CLI verbosity flags to a default filter directive.
pub fn filter_for_verbosity(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0, true), "error");
        assert_eq!(filter_for_verbosity(0, false), "info");
        assert_eq!(filter_for_verbosity(1, false), "debug");
        assert_eq!(filter_for_verbosity(3, true), "trace");
    }
}
