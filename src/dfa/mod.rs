//! Deterministic finite automata.
//!
//! A [`Dfa`] is a [`StateMachine`](crate::machine::StateMachine) plus a
//! non-empty subset of accepting states. Acceptance is a predicate over the
//! live current state, not a halting condition: the automaton can keep
//! stepping after it starts accepting.

mod automaton;

pub use automaton::Dfa;
