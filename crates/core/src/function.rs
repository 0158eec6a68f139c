use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

use crate::Callable;

const CLOSURE_NAME: &str = "<closure>";

/// A callable backed by a function that cannot fail.
///
/// Created by [`function()`].
pub struct Function<F, I, O> {
    function: F,
    _marker: PhantomData<fn(I) -> O>,
}

/// A callable backed by a function that returns a `Result`.
///
/// Created by [`try_function()`].
pub struct TryFunction<F, I, O, E> {
    function: F,
    _marker: PhantomData<fn(I) -> Result<O, E>>,
}

/// Turns a function into a [`Callable`] whose error type is [`Infallible`].
///
/// The resulting callable is named `<closure>`; use [`Callable::named()`] to
/// give it a meaningful name.
///
/// # Example
///
/// ```
/// use intercept_core::{Callable, function};
///
/// let combine = function(|(name, line): (&str, &str)| format!("{name}: {line}"));
/// assert_eq!(combine.call(("Ann", "hi")).unwrap(), "Ann: hi");
/// ```
pub const fn function<F, I, O>(function: F) -> Function<F, I, O>
where
    F: Fn(I) -> O,
{
    Function {
        function,
        _marker: PhantomData,
    }
}

/// Turns a fallible function into a [`Callable`] with the function's error type.
///
/// # Example
///
/// ```
/// use intercept_core::{Callable, try_function};
///
/// let parse = try_function(|text: &str| text.parse::<i32>());
/// assert_eq!(parse.call("42"), Ok(42));
/// assert!(parse.call("forty-two").is_err());
/// ```
pub const fn try_function<F, I, O, E>(function: F) -> TryFunction<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFunction {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O> Callable for Function<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.function)(input))
    }

    fn name(&self) -> &str {
        CLOSURE_NAME
    }
}

impl<F, I, O, E> Callable for TryFunction<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)(input)
    }

    fn name(&self) -> &str {
        CLOSURE_NAME
    }
}
