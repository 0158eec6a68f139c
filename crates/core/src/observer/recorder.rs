use std::{
    fmt::{Debug, Display},
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::Observer;

/// A single notification captured by a [`Recorder`].
///
/// Values are stored in their rendered form: inputs and outputs with `Debug`,
/// errors with `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// A call started with the given input.
    Called {
        /// Name of the callable.
        name: String,
        /// The `Debug` rendering of the input.
        input: String,
    },

    /// A call succeeded with the given output, before any transform.
    Returned {
        /// Name of the callable.
        name: String,
        /// The `Debug` rendering of the output.
        output: String,
    },

    /// A call failed with the given error.
    Failed {
        /// Name of the callable.
        name: String,
        /// The `Display` rendering of the error.
        error: String,
    },
}

/// An observer that keeps an ordered history of every notification.
///
/// Useful for auditing and tests. Pass it by reference to keep access to the
/// history while an interceptor uses it.
///
/// # Example
///
/// ```
/// use intercept_core::{Callable, Observation, Recorder, function};
///
/// let recorder = Recorder::new();
/// let double = function(|x: i32| x * 2).named("double").intercept().observe(&recorder);
///
/// double.call(4).unwrap();
///
/// assert_eq!(recorder.calls(), 1);
/// assert_eq!(
///     recorder.observations()[1],
///     Observation::Returned { name: "double".into(), output: "8".into() },
/// );
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    observations: Mutex<Vec<Observation>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the history, oldest first.
    #[must_use]
    pub fn observations(&self) -> Vec<Observation> {
        self.lock().clone()
    }

    /// Returns how many calls have started.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.lock()
            .iter()
            .filter(|observation| matches!(observation, Observation::Called { .. }))
            .count()
    }

    /// Removes every recorded observation.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, observation: Observation) {
        self.lock().push(observation);
    }

    // A panic in another observer must not hide the history.
    fn lock(&self) -> MutexGuard<'_, Vec<Observation>> {
        self.observations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<I, O, E> Observer<I, O, E> for Recorder
where
    I: Debug,
    O: Debug,
    E: Display,
{
    fn before(&self, name: &str, input: &I) {
        self.push(Observation::Called {
            name: name.to_owned(),
            input: format!("{input:?}"),
        });
    }

    fn after(&self, name: &str, output: &O) {
        self.push(Observation::Returned {
            name: name.to_owned(),
            output: format!("{output:?}"),
        });
    }

    fn failed(&self, name: &str, error: &E) {
        self.push(Observation::Failed {
            name: name.to_owned(),
            error: error.to_string(),
        });
    }
}
