//! Traces the arguments and result of a call.
//!
//! Run with `cargo run -p intercept-demos --example trace`. Set
//! `INTERCEPT_LOG=off` to silence the trace.

use std::error::Error;

use intercept_core::Callable;
use intercept_demos::decorate::{say, trace};
use intercept_observers::logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let traced = trace(say());
    let line = traced.call(("Ann".to_owned(), "hi".to_owned()))?;

    println!("{line}");

    Ok(())
}
