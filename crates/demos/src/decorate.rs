//! Decorators: functions that take a callable and return a wrapped one.

use std::convert::Infallible;

use intercept_core::{Callable, Interceptor, Uppercase, function};
use intercept_observers::Trace;

/// Returns a callable that produces a friendly greeting.
pub fn greeting() -> impl Callable<Input = (), Output = String, Error = Infallible> {
    function(|()| "Hello".to_owned())
        .named("greet")
        .documented("Return a friendly greeting")
}

/// Returns a callable that formats a line of dialogue as `{name}: {line}`.
pub fn say() -> impl Callable<Input = (String, String), Output = String, Error = Infallible> {
    function(|(name, line): (String, String)| format!("{name}: {line}")).named("say")
}

/// Decorates a callable so its string result is uppercased.
pub fn uppercase<C>(callable: C) -> Interceptor<C, (), Uppercase>
where
    C: Callable<Output = String>,
{
    callable.intercept().transform(Uppercase)
}

/// Decorates a callable so every call is logged through `tracing`.
pub fn trace<C>(callable: C) -> Interceptor<C, Trace>
where
    C: Callable,
{
    callable.intercept().observe(Trace::new())
}
