use thiserror::Error;

use crate::Identity;

use super::Interceptor;

/// Errors that can occur when building an [`Interceptor`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("no callable to intercept")]
    MissingCallable,
}

/// Assembles an [`Interceptor`] from parts that may not all be present yet.
///
/// Prefer [`Interceptor::new()`] when the callable is at hand. The builder is
/// for code that receives the callable as an `Option`, such as a registry
/// lookup, and must reject an absent one before any call is made.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use intercept_core::{BuildError, Callable, InterceptorBuilder, Uppercase, function};
///
/// let interceptor = InterceptorBuilder::new()
///     .callable(function(|()| "Hello".to_owned()))
///     .transform(Uppercase)
///     .build()
///     .unwrap();
/// assert_eq!(interceptor.call(()).unwrap(), "HELLO");
///
/// let registry: HashMap<&str, fn(()) -> String> = HashMap::new();
/// let missing = InterceptorBuilder::new()
///     .maybe_callable(registry.get("greet").copied().map(function))
///     .build();
/// assert_eq!(missing.err(), Some(BuildError::MissingCallable));
/// ```
#[derive(Debug, Clone)]
pub struct InterceptorBuilder<C, Obs = (), T = Identity> {
    callable: Option<C>,
    observer: Obs,
    transform: T,
}

impl<C> InterceptorBuilder<C> {
    /// Creates a builder with no callable, a no-op observer, and the identity
    /// transform.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callable: None,
            observer: (),
            transform: Identity,
        }
    }
}

impl<C> Default for InterceptorBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, Obs, T> InterceptorBuilder<C, Obs, T> {
    /// Sets the callable to wrap.
    #[must_use]
    pub fn callable(mut self, callable: C) -> Self {
        self.callable = Some(callable);
        self
    }

    /// Sets or clears the callable to wrap.
    #[must_use]
    pub fn maybe_callable(mut self, callable: Option<C>) -> Self {
        self.callable = callable;
        self
    }

    /// Sets the observer notified around each call.
    #[must_use]
    pub fn observer<NewObs>(self, observer: NewObs) -> InterceptorBuilder<C, NewObs, T> {
        InterceptorBuilder {
            callable: self.callable,
            observer,
            transform: self.transform,
        }
    }

    /// Sets the transform applied to successful results.
    #[must_use]
    pub fn transform<NewT>(self, transform: NewT) -> InterceptorBuilder<C, Obs, NewT> {
        InterceptorBuilder {
            callable: self.callable,
            observer: self.observer,
            transform,
        }
    }

    /// Builds the interceptor.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCallable`] if no callable was supplied.
    pub fn build(self) -> Result<Interceptor<C, Obs, T>, BuildError> {
        let callable = self.callable.ok_or(BuildError::MissingCallable)?;

        Ok(Interceptor {
            callable,
            observer: self.observer,
            transform: self.transform,
        })
    }
}
