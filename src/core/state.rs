//! Core State traits for automaton states.
//!
//! Every automaton state implements [`State`]. State types that form a closed
//! enumeration can also implement [`EnumerableState`], which lets a machine
//! derive its full state set without the caller listing it.

use std::fmt::Debug;

/// Trait for automaton states.
///
/// States are opaque to the engine. It only compares them for equality when
/// checking set membership, clones them when resetting, and names them in
/// diagnostics.
///
/// # Required Traits
///
/// - `Clone`: the initial state is copied back into the current state on reset
/// - `PartialEq`: membership in the declared state set is checked by equality
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: machines may be moved across threads
///
/// # Example
///
/// ```rust
/// use automa::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A state type whose values form a closed, finite enumeration.
///
/// Implementing this trait allows machines to be built without an explicit
/// state list: the set of legal states is [`EnumerableState::all`].
/// The [`state_enum!`](crate::state_enum) macro implements it automatically.
///
/// # Example
///
/// ```rust
/// use automa::core::{EnumerableState, State};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Bit {
///     Zero,
///     One,
/// }
///
/// impl State for Bit {
///     fn name(&self) -> &str {
///         match self {
///             Self::Zero => "Zero",
///             Self::One => "One",
///         }
///     }
/// }
///
/// impl EnumerableState for Bit {
///     fn all() -> Vec<Self> {
///         vec![Self::Zero, Self::One]
///     }
/// }
///
/// assert_eq!(Bit::all().len(), 2);
/// ```
pub trait EnumerableState: State {
    /// Every value of the state type, in declaration order.
    fn all() -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestState {
        Start,
        Running,
        Halted,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Running => "Running",
                Self::Halted => "Halted",
            }
        }
    }

    impl EnumerableState for TestState {
        fn all() -> Vec<Self> {
            vec![Self::Start, Self::Running, Self::Halted]
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Start.name(), "Start");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Halted.name(), "Halted");
    }

    #[test]
    fn enumeration_lists_every_variant_in_order() {
        assert_eq!(
            TestState::all(),
            vec![TestState::Start, TestState::Running, TestState::Halted]
        );
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Running;
        let state2 = TestState::Running;
        let state3 = TestState::Halted;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
