use std::borrow::Cow;

use crate::Callable;

/// A callable with an attached name and documentation.
///
/// Created by [`Callable::named()`] and [`Callable::documented()`]. Calls are
/// delegated unchanged; only [`Callable::name()`] and [`Callable::doc()`]
/// differ from the wrapped callable, and each falls back to it when unset.
#[derive(Debug, Clone)]
pub struct Named<C> {
    callable: C,
    name: Option<Cow<'static, str>>,
    doc: Option<Cow<'static, str>>,
}

impl<C> Named<C> {
    pub(crate) fn new(callable: C) -> Self {
        Self {
            callable,
            name: None,
            doc: None,
        }
    }

    /// Replaces the attached name.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the attached documentation.
    #[must_use]
    pub fn documented(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> C {
        self.callable
    }
}

impl<C: Callable> Callable for Named<C> {
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.callable.call(input)
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.callable.name())
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref().or_else(|| self.callable.doc())
    }
}
