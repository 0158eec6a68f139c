mod recorder;

pub use recorder::{Observation, Recorder};

/// Receives notifications around each call made through an
/// [`Interceptor`](crate::Interceptor).
///
/// For every call, [`before`](Observer::before) runs first, then the wrapped
/// callable, then exactly one of [`after`](Observer::after) or
/// [`failed`](Observer::failed). All methods default to doing nothing, so an
/// observer only implements the hooks it cares about.
///
/// Observers see values by reference and cannot change them. A built-in impl
/// for `()` provides a no-op observer.
pub trait Observer<I, O, E> {
    /// Called with the input before the wrapped callable runs.
    fn before(&self, _name: &str, _input: &I) {}

    /// Called with the output after the wrapped callable succeeds.
    fn after(&self, _name: &str, _output: &O) {}

    /// Called with the error after the wrapped callable fails.
    fn failed(&self, _name: &str, _error: &E) {}
}

/// A no-op observer.
impl<I, O, E> Observer<I, O, E> for () {}

impl<I, O, E, T> Observer<I, O, E> for &T
where
    T: Observer<I, O, E> + ?Sized,
{
    fn before(&self, name: &str, input: &I) {
        (**self).before(name, input);
    }

    fn after(&self, name: &str, output: &O) {
        (**self).after(name, output);
    }

    fn failed(&self, name: &str, error: &E) {
        (**self).failed(name, error);
    }
}

/// An observer built from a pair of closures.
///
/// This struct is created by [`Callable::inspect()`](crate::Callable::inspect).
/// Failures are not reported to either closure.
#[derive(Debug, Clone, Copy)]
pub struct Inspect<Before, After> {
    before: Before,
    after: After,
}

impl<Before, After> Inspect<Before, After> {
    /// Creates an observer that calls `before` with each input and `after`
    /// with each successful output.
    pub const fn new(before: Before, after: After) -> Self {
        Self { before, after }
    }
}

impl<I, O, E, Before, After> Observer<I, O, E> for Inspect<Before, After>
where
    Before: Fn(&I),
    After: Fn(&O),
{
    fn before(&self, _name: &str, input: &I) {
        (self.before)(input);
    }

    fn after(&self, _name: &str, output: &O) {
        (self.after)(output);
    }
}
