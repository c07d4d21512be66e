//! Custom Alphabet
//!
//! This example builds a DFA for unsigned decimal numbers with an optional
//! fractional part, using character ranges as the input classes.
//!
//! Key concepts:
//! - Declaring states with `state_enum!`
//! - Building an automaton with `DfaBuilder`
//! - Multiple accept states
//! - `Interval` for character classes
//!
//! Run with: cargo run --example custom_alphabet

use automa::builder::DfaBuilder;
use automa::state_enum;
use automa::util::Interval;

state_enum! {
    enum Number {
        Empty,
        Integer,
        Dot,
        Fraction,
        Invalid,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Custom Alphabet Example ===\n");

    let digits = Interval::new('0', '9')?;

    let mut dfa = DfaBuilder::new()
        .all_states()
        .initial(Number::Empty)
        .accept_all([Number::Integer, Number::Fraction])
        .rule(move |current: &Number, c: &char| {
            let digit = digits.contains(c);
            match current {
                Number::Empty | Number::Integer if digit => Number::Integer,
                Number::Integer if *c == '.' => Number::Dot,
                Number::Dot | Number::Fraction if digit => Number::Fraction,
                _ => Number::Invalid,
            }
        })
        .build()?;

    for input in ["42", "3.14", "7.", ".5", "", "1.2.3"] {
        let accepted = dfa.run(input.chars())?;
        println!(
            "{input:>8?} -> {:<8} ({:?})",
            if accepted { "number" } else { "rejected" },
            dfa.current_state()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
