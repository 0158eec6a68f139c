//! Passes callables around as values.
//!
//! Run with `cargo run -p intercept-demos --example first_class -- whisper`.
//! Without an argument every voice is used.

use std::error::Error;

use intercept_core::Callable;
use intercept_demos::first_class::{greet, voice, voices};
use intercept_observers::logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let selected = match std::env::args().nth(1) {
        Some(name) => vec![voice(&name).ok_or_else(|| format!("unknown voice `{name}`"))?],
        None => voices(),
    };

    for voice in &selected {
        tracing::info!(voice = voice.name(), "greeting");
        println!("{}", greet(voice)?);
    }

    Ok(())
}
