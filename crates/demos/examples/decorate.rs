//! Decorates a greeting so its result is uppercased.
//!
//! Run with `cargo run -p intercept-demos --example decorate`.

use std::error::Error;

use intercept_core::Callable;
use intercept_demos::decorate::{greeting, uppercase};
use intercept_observers::logging;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let greet = greeting();
    let loud = uppercase(greeting());

    println!("{}() -> {}", greet.name(), greet.call(())?);
    println!("decorated {}() -> {}", loud.name(), loud.call(())?);

    if let Some(doc) = loud.doc() {
        println!("docs still read: {doc}");
    }

    Ok(())
}
