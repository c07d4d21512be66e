//! The generic state machine engine.
//!
//! A [`StateMachine`] owns a closed [`StateSet`](crate::core::StateSet), an
//! initial state, its current state and a
//! [`TransitionRule`](crate::core::TransitionRule). Each call to `step` runs
//! the rule and checks that the result is a declared state before storing it.

mod error;
mod state_machine;

pub use error::{ConfigurationError, InvalidStateError};
pub use state_machine::{Rule, StateMachine};
