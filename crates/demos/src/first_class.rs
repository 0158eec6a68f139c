//! Callables as values: stored, looked up by name, and passed to functions.

use std::convert::Infallible;

use intercept_core::{Callable, function};

/// The text every voice is asked to speak.
pub const PROGRAM_GREETING: &str = "Hi, I'm a Rust program";

/// A boxed text-to-text callable.
pub type Voice = Box<dyn Callable<Input = String, Output = String, Error = Infallible>>;

pub fn yell(text: String) -> String {
    text.to_uppercase() + "!"
}

pub fn whisper(text: String) -> String {
    text.to_lowercase() + "..."
}

/// Calls `func` with [`PROGRAM_GREETING`] and returns what it produced.
///
/// # Errors
///
/// Returns the error of `func` unchanged.
pub fn greet<C>(func: &C) -> Result<C::Output, C::Error>
where
    C: Callable<Input = String> + ?Sized,
{
    func.call(PROGRAM_GREETING.to_owned())
}

/// Returns every available voice, in a stable order.
#[must_use]
pub fn voices() -> Vec<Voice> {
    let loud: Voice = Box::new(function(yell).named("yell"));
    let soft: Voice = Box::new(function(whisper).named("whisper"));
    vec![loud, soft]
}

/// Looks up a voice by name.
#[must_use]
pub fn voice(name: &str) -> Option<Voice> {
    voices().into_iter().find(|voice| voice.name() == name)
}
