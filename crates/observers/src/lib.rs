//! Reusable observers for intercepted callables.
//!
//! This crate provides [`Observer`] implementations that plug into any
//! [`Interceptor`], plus the logging setup they expect.
//!
//! # Modules
//!
//! - [`logging`] — Installs a `tracing` subscriber filtered by `INTERCEPT_LOG`
//!
//! # Observers
//!
//! - [`Trace`] — Emits one `tracing` event before each call and one after,
//!   configured by [`TraceConfig`]
//!
//! [`Observer`]: intercept_core::Observer
//! [`Interceptor`]: intercept_core::Interceptor

pub mod logging;
mod trace;

pub use trace::{ConfigError, Trace, TraceConfig};
