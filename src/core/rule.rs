//! Transition rules mapping the current state and an input to the next state.

use super::state::State;

/// Pure function from the current state and an input symbol to the next state.
///
/// A rule must be total over the alphabet it is fed: every reachable
/// `(state, input)` pair maps to some state. Rules that need a dedicated
/// failure outcome usually route it to a trap state that loops on itself.
///
/// Any `Fn(&S, &I) -> S` closure that is `Send + Sync` is a rule, so small
/// automata rarely need a named type.
///
/// # Example
///
/// ```rust
/// use automa::core::{State, TransitionRule};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Toggle { On, Off }
///
/// impl State for Toggle {
///     fn name(&self) -> &str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
/// }
///
/// struct Flip;
///
/// impl TransitionRule<Toggle, ()> for Flip {
///     fn transition(&self, current: &Toggle, _input: &()) -> Toggle {
///         match current {
///             Toggle::On => Toggle::Off,
///             Toggle::Off => Toggle::On,
///         }
///     }
/// }
///
/// assert_eq!(Flip.transition(&Toggle::On, &()), Toggle::Off);
/// ```
pub trait TransitionRule<S: State, I>: Send + Sync {
    /// Compute the next state. Must not have side effects.
    fn transition(&self, current: &S, input: &I) -> S;
}

impl<S, I, F> TransitionRule<S, I> for F
where
    S: State,
    F: Fn(&S, &I) -> S + Send + Sync,
{
    fn transition(&self, current: &S, input: &I) -> S {
        self(current, input)
    }
}
