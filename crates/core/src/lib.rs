//! Core traits and types for call interception.
//!
//! This crate defines the pieces needed to wrap any callable so its calls can
//! be observed and its results transformed, while the wrapped callable keeps
//! its signature, its errors, and its identity:
//!
//! - [`Callable`] — a unit of behavior that maps a typed input to a typed output
//! - [`Interceptor`] — a callable that wraps exactly one other callable
//! - [`Observer`] — side-effecting hooks run before and after each call
//! - [`Transform`] — a pure function applied to a successful result
//! - [`function()`] and [`try_function()`] — adapters that turn closures into callables

mod callable;
mod function;
mod interceptor;
mod observer;
mod transform;

pub use callable::{Callable, Named};
pub use function::{Function, TryFunction, function, try_function};
pub use interceptor::{BuildError, Interceptor, InterceptorBuilder};
pub use observer::{Inspect, Observation, Observer, Recorder};
pub use transform::{Identity, Transform, Uppercase};
