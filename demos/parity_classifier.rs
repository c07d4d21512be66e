//! Parity Classifier
//!
//! Reads lines from standard input and prints whether each one is an odd
//! binary string, an even one, or neither.
//!
//! Key concepts:
//! - Two automata sharing one transition rule, differing only in accept state
//! - An explicit end-of-input marker fed after the last character
//! - Transitions are traced when `RUST_LOG=automa=trace` is set
//!
//! Run with: cargo run --example parity_classifier

use automa::parity::{classify, Parity, ParityMatcher};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut odd = ParityMatcher::odd();
    let mut even = ParityMatcher::even();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let verdict = match classify(&mut odd, &mut even, &line)? {
            Parity::Odd => "odd",
            Parity::Even => "even",
            Parity::Neither => "neither odd nor even",
        };
        writeln!(stdout, "{verdict}")?;
    }

    Ok(())
}
