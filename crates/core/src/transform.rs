/// A pure function applied to a successful result before it is returned.
///
/// Any `Fn(T) -> R` is a `Transform<T>`, so most transformations are written
/// as closures. [`Identity`] and [`Uppercase`] cover the common cases by name.
///
/// Implementations must not have side effects; observation belongs in an
/// [`Observer`](crate::Observer).
pub trait Transform<T> {
    type Output;

    /// Transforms a result value.
    fn apply(&self, value: T) -> Self::Output;
}

impl<T, R, F> Transform<T> for F
where
    F: Fn(T) -> R,
{
    type Output = R;

    fn apply(&self, value: T) -> Self::Output {
        self(value)
    }
}

/// Returns results unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Transform<T> for Identity {
    type Output = T;

    fn apply(&self, value: T) -> Self::Output {
        value
    }
}

/// Converts string results to uppercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uppercase;

impl Transform<String> for Uppercase {
    type Output = String;

    fn apply(&self, value: String) -> Self::Output {
        value.to_uppercase()
    }
}

impl Transform<&str> for Uppercase {
    type Output = String;

    fn apply(&self, value: &str) -> Self::Output {
        value.to_uppercase()
    }
}
