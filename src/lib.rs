//! Automa: a small generic finite state machine engine
//!
//! Automa drives deterministic automata over a closed set of states and any
//! input alphabet. Clients declare the states, pick an initial state, and
//! supply a pure transition rule. The engine runs the rule one input at a
//! time and rejects any result that falls outside the declared states.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Transition rule**: A pure function of (current state, input)
//! - **State machine**: Tracks the current state and validates every step
//! - **DFA**: A state machine with a set of accepting states
//!
//! # Example
//!
//! ```rust
//! use automa::dfa::Dfa;
//! use automa::state_enum;
//! use automa::util::Optional;
//!
//! state_enum! {
//!     enum Parity {
//!         Start,
//!         Even,
//!         Odd,
//!         Reject,
//!     }
//! }
//!
//! let rule = |current: &Parity, input: &Optional<char>| match (current, input) {
//!     (Parity::Reject, _) => Parity::Reject,
//!     (_, Optional::Value('0')) => Parity::Even,
//!     (_, Optional::Value('1')) => Parity::Odd,
//!     (_, Optional::Value(_)) => Parity::Reject,
//!     (Parity::Start, Optional::Empty) => Parity::Reject,
//!     (settled, Optional::Empty) => *settled,
//! };
//!
//! let mut odd = Dfa::from_enum_with_accept_state(Parity::Odd, Parity::Start, rule).unwrap();
//!
//! odd.step('1'.into()).unwrap();
//! odd.step('1'.into()).unwrap();
//! odd.step(Optional::empty()).unwrap();
//! assert!(odd.accepts());
//! assert_eq!(odd.current_state(), &Parity::Odd);
//! ```

pub mod builder;
pub mod core;
pub mod dfa;
pub mod machine;
pub mod parity;
pub mod util;

// Re-export commonly used types
pub use builder::{DfaBuilder, StateMachineBuilder};
pub use crate::core::{EnumerableState, State, StateSet, TransitionRule};
pub use dfa::Dfa;
pub use machine::{ConfigurationError, InvalidStateError, StateMachine};
pub use util::{EmptyValueError, Interval, IntervalError, Optional};
