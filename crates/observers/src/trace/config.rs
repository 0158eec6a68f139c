use thiserror::Error;
use tracing::Level;

const ELLIPSIS: &str = "...";

/// Configuration for the [`Trace`](super::Trace) observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    level: Level,
    max_len: Option<usize>,
}

/// Errors that can occur when validating a trace config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_len must be greater than zero")]
    ZeroMaxLen,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            max_len: None,
        }
    }
}

impl TraceConfig {
    /// Creates a new config.
    ///
    /// `max_len` caps how many characters of a rendered input, output, or
    /// error are logged. `None` logs them in full.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_len` is `Some(0)`.
    pub fn new(level: Level, max_len: Option<usize>) -> Result<Self, ConfigError> {
        if max_len == Some(0) {
            return Err(ConfigError::ZeroMaxLen);
        }

        Ok(Self { level, max_len })
    }

    /// Returns the level trace events are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the maximum rendered length, if any.
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Cuts a rendered value down to `max_len` characters.
    pub(crate) fn truncate(&self, rendered: String) -> String {
        match self.max_len {
            Some(max_len) => match rendered.char_indices().nth(max_len) {
                Some((cut, _)) => format!("{}{ELLIPSIS}", &rendered[..cut]),
                None => rendered,
            },
            None => rendered,
        }
    }
}
