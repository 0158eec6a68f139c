mod named;

use std::{any::type_name, borrow::Cow};

use crate::{Identity, Inspect, Interceptor};

pub use named::Named;

/// The core trait for anything that can be intercepted.
///
/// A `Callable` takes an input and produces an output or fails with its own
/// error type. Positional arguments are passed as a tuple (`(name, line)`),
/// named arguments as a struct, and no arguments as `()`.
///
/// ## Implementing `Callable`
///
/// Only [`call()`] is required. Closures can be adapted with
/// [`function()`](fn@crate::function) or [`try_function()`](fn@crate::try_function)
/// instead of writing a type.
///
/// ## Identity
///
/// Every callable has a [`name()`] and an optional [`doc()`]. Wrappers such as
/// [`Interceptor`] forward both from the callable they wrap, so tooling that
/// inspects a decorated callable sees the original identity.
///
/// ## Intercepting
///
/// - [`Callable::intercept()`] – Wrap without observing or transforming.
/// - [`Callable::inspect()`] – Observe inputs and outputs with closures.
/// - [`Callable::map_output()`] – Transform successful results.
///
/// [`call()`]: Callable::call
/// [`name()`]: Callable::name
/// [`doc()`]: Callable::doc
pub trait Callable {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each callable defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Returns the name used to identify this callable.
    ///
    /// Defaults to the short type name of the implementor.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }

    /// Returns the documentation attached to this callable, if any.
    fn doc(&self) -> Option<&str> {
        None
    }

    /// Attaches a name to this callable.
    ///
    /// # Example
    ///
    /// ```
    /// use intercept_core::{Callable, function};
    ///
    /// let greet = function(|()| "Hello".to_owned()).named("greet");
    /// assert_eq!(greet.name(), "greet");
    /// ```
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self>
    where
        Self: Sized,
    {
        Named::new(self).named(name)
    }

    /// Attaches documentation to this callable.
    fn documented(self, doc: impl Into<Cow<'static, str>>) -> Named<Self>
    where
        Self: Sized,
    {
        Named::new(self).documented(doc)
    }

    /// Wraps this callable in an [`Interceptor`] that neither observes nor
    /// transforms.
    ///
    /// Use [`Interceptor::observe()`] and [`Interceptor::transform()`] on the
    /// result to configure it.
    fn intercept(self) -> Interceptor<Self>
    where
        Self: Sized,
    {
        Interceptor::new(self)
    }

    /// Observes inputs and outputs without modifying behavior.
    ///
    /// # Parameters
    ///
    /// - `before`: Called with the input before the call.
    /// - `after`: Called with the output after a successful call.
    ///
    /// # Example
    ///
    /// ```
    /// use intercept_core::{Callable, function};
    ///
    /// let doubler = function(|x: i32| x * 2).inspect(
    ///     |input| println!("Received: {input:?}"),
    ///     |output| println!("Produced: {output:?}"),
    /// );
    ///
    /// assert_eq!(doubler.call(5), Ok(10));
    /// // Prints:
    /// // Received: 5
    /// // Produced: 10
    /// ```
    fn inspect<Before, After>(
        self,
        before: Before,
        after: After,
    ) -> Interceptor<Self, Inspect<Before, After>, Identity>
    where
        Self: Sized,
        Before: Fn(&Self::Input),
        After: Fn(&Self::Output),
    {
        Interceptor::new(self).observe(Inspect::new(before, after))
    }

    /// Transforms successful results with a pure function.
    ///
    /// Errors pass through untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use intercept_core::{Callable, function};
    ///
    /// let shout = function(|()| "Hello".to_owned()).map_output(|s: String| s.to_uppercase());
    /// assert_eq!(shout.call(()).unwrap(), "HELLO");
    /// ```
    fn map_output<F, R>(self, transform: F) -> Interceptor<Self, (), F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> R,
    {
        Interceptor::new(self).transform(transform)
    }
}

impl<C> Callable for &C
where
    C: Callable + ?Sized,
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn doc(&self) -> Option<&str> {
        (**self).doc()
    }
}

impl<C> Callable for Box<C>
where
    C: Callable + ?Sized,
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn doc(&self) -> Option<&str> {
        (**self).doc()
    }
}

/// Returns the last path segment of a type name, ignoring generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full_type_name = type_name::<T>();
    let without_generics = full_type_name
        .split_once('<')
        .map_or(full_type_name, |(head, _)| head);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, error::Error as StdError, fmt};

    use super::*;

    struct Doubler;

    impl Callable for Doubler {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * 2)
        }
    }

    struct Adder {
        increment: i32,
    }

    impl Callable for Adder {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input + self.increment)
        }
    }

    struct Failer;

    impl Callable for Failer {
        type Input = ();
        type Output = ();
        type Error = FailerError;

        fn call(&self, _input: Self::Input) -> Result<Self::Output, Self::Error> {
            Err(FailerError)
        }
    }

    #[derive(Debug, PartialEq)]
    struct FailerError;

    impl fmt::Display for FailerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "The failer failed.")
        }
    }

    impl StdError for FailerError {}

    #[test]
    fn basic_callables() {
        assert_eq!(Doubler.call(2), Ok(4));
        assert_eq!(Adder { increment: 5 }.call(3), Ok(8));
        assert_eq!(Failer.call(()), Err(FailerError));
    }

    #[test]
    fn default_name_is_short_type_name() {
        assert_eq!(Doubler.name(), "Doubler");
        assert_eq!(Adder { increment: 1 }.name(), "Adder");
        assert_eq!(Doubler.doc(), None);
    }

    #[test]
    fn short_type_name_drops_generics() {
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
        assert_eq!(short_type_name::<Option<Box<Doubler>>>(), "Option");
        assert_eq!(short_type_name::<i32>(), "i32");
    }

    #[test]
    fn references_and_boxes_are_callable() {
        let add_one = Adder { increment: 1 };

        let by_ref = &add_one;
        assert_eq!(by_ref.call(1), Ok(2));
        assert_eq!(by_ref.name(), "Adder");

        let boxed: Box<dyn Callable<Input = i32, Output = i32, Error = Infallible>> =
            Box::new(Doubler);
        assert_eq!(boxed.call(21), Ok(42));
        assert_eq!(boxed.name(), "Doubler");
    }

    #[test]
    fn callables_are_first_class_values() {
        fn apply_twice<C>(callable: &C, input: i32) -> i32
        where
            C: Callable<Input = i32, Output = i32, Error = Infallible>,
        {
            let Ok(once) = callable.call(input);
            let Ok(twice) = callable.call(once);
            twice
        }

        let choices: Vec<Box<dyn Callable<Input = i32, Output = i32, Error = Infallible>>> =
            vec![Box::new(Doubler), Box::new(Adder { increment: 10 })];

        let results: Vec<_> = choices.iter().map(|c| apply_twice(c, 1)).collect();
        assert_eq!(results, vec![4, 21]);
    }
}
