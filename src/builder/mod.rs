//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and the [`state_enum!`](crate::state_enum)
//! macro for declaring machines with minimal boilerplate. All construction
//! checks run in `build()` and surface as
//! [`ConfigurationError`](crate::machine::ConfigurationError).

pub mod dfa;
pub mod machine;
pub mod macros;

pub use dfa::DfaBuilder;
pub use machine::StateMachineBuilder;
