//! Core automaton types.
//!
//! This module holds the pieces every machine is made of:
//! - State definitions via the `State` and `EnumerableState` traits
//! - Closed state sets with membership checks
//! - Transition rules as pure functions of (state, input)
//!
//! Nothing in this module mutates anything; the machines in
//! [`crate::machine`] and [`crate::dfa`] own the only mutable state.

mod rule;
mod state;
mod states;

pub use rule::TransitionRule;
pub use state::{EnumerableState, State};
pub use states::StateSet;
