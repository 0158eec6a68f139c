//! Small callables showing decoration and first-class use.
//!
//! - [`decorate`] — decorators built on [`Interceptor`](intercept_core::Interceptor)
//!   and the callables they decorate
//! - [`first_class`] — callables passed around as ordinary values

pub mod decorate;
pub mod first_class;
