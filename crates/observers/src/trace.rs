mod config;

use std::fmt::{Debug, Display};

use intercept_core::Observer;
use tracing::Level;

pub use config::{ConfigError, TraceConfig};

/// Dispatches to the `tracing` macro for a runtime level.
///
/// `tracing` needs the level of each callsite at compile time.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            Level::ERROR => tracing::error!($($arg)+),
            Level::WARN => tracing::warn!($($arg)+),
            Level::INFO => tracing::info!($($arg)+),
            Level::DEBUG => tracing::debug!($($arg)+),
            _ => tracing::trace!($($arg)+),
        }
    };
}

/// An observer that logs each call through `tracing`.
///
/// Every call produces exactly two events: `calling {name}() with {input:?}`
/// before the wrapped callable runs, then either `{name}() returned
/// {output:?}` or `{name}() failed: {error}`. Each event carries the
/// callable's name in a `callable` field.
///
/// # Example
///
/// ```
/// use intercept_core::{Callable, function};
/// use intercept_observers::Trace;
///
/// let say = function(|(name, line): (&str, &str)| format!("{name}: {line}"))
///     .named("say")
///     .intercept()
///     .observe(Trace::new());
///
/// assert_eq!(say.call(("Ann", "hi")).unwrap(), "Ann: hi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace {
    config: TraceConfig,
}

impl Trace {
    /// Creates a trace observer that logs at `INFO` without truncation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trace observer with the given config.
    #[must_use]
    pub fn with_config(config: TraceConfig) -> Self {
        Self { config }
    }

    /// Returns the active config.
    #[must_use]
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }
}

impl<I, O, E> Observer<I, O, E> for Trace
where
    I: Debug,
    O: Debug,
    E: Display,
{
    fn before(&self, name: &str, input: &I) {
        let input = self.config.truncate(format!("{input:?}"));
        event_at!(
            self.config.level(),
            callable = name,
            "calling {name}() with {input}"
        );
    }

    fn after(&self, name: &str, output: &O) {
        let output = self.config.truncate(format!("{output:?}"));
        event_at!(
            self.config.level(),
            callable = name,
            "{name}() returned {output}"
        );
    }

    fn failed(&self, name: &str, error: &E) {
        let error = self.config.truncate(error.to_string());
        event_at!(
            self.config.level(),
            callable = name,
            "{name}() failed: {error}"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        num::ParseIntError,
        sync::{Arc, Mutex},
    };

    use intercept_core::{Callable, Uppercase, function, try_function};

    use super::*;

    /// An in-memory writer for capturing formatted log output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that records events up to `max_level`.
    fn capture<R>(max_level: Level, f: impl FnOnce() -> R) -> (R, String) {
        let captured = Captured::default();
        let writer = captured.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(max_level)
            .with_ansi(false)
            .without_time()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, captured.text())
    }

    fn say() -> impl Callable<Input = (&'static str, &'static str), Output = String> {
        function(|(name, line): (&'static str, &'static str)| format!("{name}: {line}"))
            .named("say")
    }

    #[test]
    fn logs_once_before_and_once_after() {
        let traced = say().intercept().observe(Trace::new());

        let (result, logs) = capture(Level::TRACE, || traced.call(("Ann", "hi")));

        assert_eq!(result.unwrap(), "Ann: hi");

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected logs:\n{logs}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains(r#"calling say() with ("Ann", "hi")"#));
        assert!(lines[1].contains(r#"say() returned "Ann: hi""#));
    }

    #[test]
    fn logs_failures_with_display() {
        let parse = try_function(|text: &str| text.parse::<i32>())
            .named("parse")
            .intercept()
            .observe(Trace::new());

        let (result, logs) = capture(Level::TRACE, || parse.call("nope"));

        let expected: ParseIntError = "nope".parse::<i32>().unwrap_err();
        assert_eq!(result, Err(expected.clone()));
        assert!(logs.contains(r#"calling parse() with "nope""#));
        assert!(logs.contains(&format!("parse() failed: {expected}")));
        assert!(!logs.contains("returned"));
    }

    #[test]
    fn logs_the_output_before_transformation() {
        let loud = function(|()| "Hello".to_owned())
            .named("greet")
            .intercept()
            .observe(Trace::new())
            .transform(Uppercase);

        let (result, logs) = capture(Level::TRACE, || loud.call(()));

        assert_eq!(result.unwrap(), "HELLO");
        assert!(logs.contains(r#"greet() returned "Hello""#));
    }

    #[test]
    fn respects_the_configured_level() {
        let config = TraceConfig::new(Level::DEBUG, None).unwrap();
        let traced = say().intercept().observe(Trace::with_config(config));
        assert_eq!(traced.observer().config().level(), Level::DEBUG);
        assert_eq!(Trace::new().config(), &TraceConfig::default());

        let (_, quiet) = capture(Level::INFO, || traced.call(("Ann", "hi")));
        assert!(quiet.is_empty(), "unexpected logs:\n{quiet}");

        let (_, verbose) = capture(Level::DEBUG, || traced.call(("Ann", "hi")));
        assert_eq!(verbose.lines().count(), 2);
        assert!(verbose.lines().all(|line| line.contains("DEBUG")));
    }

    #[test]
    fn truncates_long_renderings() {
        let config = TraceConfig::new(Level::INFO, Some(5)).unwrap();
        let traced = say().intercept().observe(Trace::with_config(config));

        let (_, logs) = capture(Level::TRACE, || traced.call(("Ann", "hi")));

        assert!(logs.contains(r#"calling say() with ("Ann..."#));
        assert!(logs.contains(r#"say() returned "Ann:..."#));
    }
}
