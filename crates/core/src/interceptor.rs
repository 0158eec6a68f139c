mod builder;

use crate::{Callable, Identity, Observer, Transform};

pub use builder::{BuildError, InterceptorBuilder};

/// A callable that wraps exactly one other callable.
///
/// Each call to an `Interceptor`:
///
/// 1. Notifies the observer with the input.
/// 2. Calls the wrapped callable once with that input.
/// 3. Notifies the observer with the output or the error.
/// 4. Applies the transform to a successful output and returns it.
///
/// The wrapped callable's error is returned as-is, never converted. The
/// interceptor reports the wrapped callable's [`name()`](Callable::name) and
/// [`doc()`](Callable::doc) as its own.
///
/// Interceptors hold no state between calls beyond what the observer keeps.
/// Because an `Interceptor` is itself a [`Callable`], it can be wrapped again.
///
/// # Example
///
/// ```
/// use intercept_core::{Callable, Interceptor, Uppercase, function};
///
/// let greet = function(|()| "Hello".to_owned()).named("greet");
/// let loud = Interceptor::new(greet).transform(Uppercase);
///
/// assert_eq!(loud.call(()).unwrap(), "HELLO");
/// assert_eq!(loud.name(), "greet");
/// ```
#[derive(Debug, Clone)]
pub struct Interceptor<C, Obs = (), T = Identity> {
    callable: C,
    observer: Obs,
    transform: T,
}

impl<C> Interceptor<C> {
    /// Wraps a callable without observing or transforming its calls.
    pub const fn new(callable: C) -> Self {
        Self {
            callable,
            observer: (),
            transform: Identity,
        }
    }
}

impl<C, Obs, T> Interceptor<C, Obs, T> {
    /// Replaces the observer notified around each call.
    pub fn observe<NewObs>(self, observer: NewObs) -> Interceptor<C, NewObs, T> {
        Interceptor {
            callable: self.callable,
            observer,
            transform: self.transform,
        }
    }

    /// Replaces the transform applied to successful results.
    pub fn transform<NewT>(self, transform: NewT) -> Interceptor<C, Obs, NewT> {
        Interceptor {
            callable: self.callable,
            observer: self.observer,
            transform,
        }
    }

    /// Returns a reference to the wrapped callable.
    pub fn callable(&self) -> &C {
        &self.callable
    }

    /// Returns a reference to the observer.
    pub fn observer(&self) -> &Obs {
        &self.observer
    }

    /// Unwraps the interceptor, returning the wrapped callable.
    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C, Obs, T> Callable for Interceptor<C, Obs, T>
where
    C: Callable,
    Obs: Observer<C::Input, C::Output, C::Error>,
    T: Transform<C::Output>,
{
    type Input = C::Input;
    type Output = T::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let name = self.callable.name();

        self.observer.before(name, &input);

        match self.callable.call(input) {
            Ok(output) => {
                self.observer.after(name, &output);
                Ok(self.transform.apply(output))
            }
            Err(error) => {
                self.observer.failed(name, &error);
                Err(error)
            }
        }
    }

    fn name(&self) -> &str {
        self.callable.name()
    }

    fn doc(&self) -> Option<&str> {
        self.callable.doc()
    }
}
