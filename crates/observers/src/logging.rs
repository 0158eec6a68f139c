//! Subscriber setup for programs that use [`Trace`](crate::Trace).
//!
//! The filter is read from the `INTERCEPT_LOG` environment variable using
//! `EnvFilter` directive syntax (for example `INTERCEPT_LOG=debug` or
//! `INTERCEPT_LOG=intercept_observers=trace`). When unset or invalid, `info`
//! is used.

use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "INTERCEPT_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Installs a global `fmt` subscriber filtered by [`LOG_ENV`].
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

fn filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref())
}

/// Builds a filter from directives, falling back to `info` when they are
/// missing or do not parse.
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
