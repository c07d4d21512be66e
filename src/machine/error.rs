//! Errors raised while building or stepping machines.

use thiserror::Error;

/// Errors that can occur when constructing a machine or automaton.
///
/// A construction that fails never produces an instance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Empty state set passed to machine constructor")]
    EmptyStates,

    #[error("Initial state '{state}' is not in the declared state set")]
    UndeclaredInitialState { state: String },

    #[error("Empty accept state set passed to automaton constructor")]
    EmptyAcceptStates,

    #[error("Accept state '{state}' is not in the declared state set")]
    UndeclaredAcceptState { state: String },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition rule not specified. Call .rule(rule) before .build()")]
    MissingTransitionRule,
}

/// A transition rule returned a state outside the declared state set.
///
/// This always points at a bug in the rule. The machine keeps the state it
/// was in before the failed step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown state '{to}' returned by transition rule from state '{from}'")]
pub struct InvalidStateError {
    pub from: String,
    pub to: String,
}
