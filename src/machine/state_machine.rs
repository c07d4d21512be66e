//! Generic deterministic state machine.

use crate::core::{EnumerableState, State, StateSet, TransitionRule};
use crate::machine::error::{ConfigurationError, InvalidStateError};
use std::fmt;
use std::sync::Arc;

/// Shared handle to a transition rule.
pub type Rule<S, I> = Arc<dyn TransitionRule<S, I>>;

/// State machine over a closed set of states, driven one input at a time.
///
/// The machine validates every transition result against its declared state
/// set. A rule that produces an undeclared state makes [`StateMachine::step`]
/// fail with [`InvalidStateError`] and leaves the current state unchanged.
///
/// Cloning a machine shares the rule and copies the current state; the clones
/// advance independently afterwards.
///
/// # Example
///
/// ```rust
/// use automa::core::State;
/// use automa::machine::StateMachine;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Turnstile {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// let mut machine = StateMachine::new(
///     [Turnstile::Locked, Turnstile::Unlocked],
///     Turnstile::Locked,
///     |_: &Turnstile, coin: &bool| {
///         if *coin {
///             Turnstile::Unlocked
///         } else {
///             Turnstile::Locked
///         }
///     },
/// )
/// .unwrap();
///
/// machine.step(true).unwrap();
/// assert_eq!(machine.current_state(), &Turnstile::Unlocked);
///
/// machine.reset();
/// assert_eq!(machine.current_state(), &Turnstile::Locked);
/// ```
pub struct StateMachine<S: State, I> {
    states: StateSet<S>,
    initial: S,
    current: S,
    rule: Rule<S, I>,
}

impl<S: State, I> StateMachine<S, I> {
    /// Create a machine over an explicit state set.
    ///
    /// Fails if `states` is empty or does not contain `initial`.
    pub fn new<T, R>(states: T, initial: S, rule: R) -> Result<Self, ConfigurationError>
    where
        T: IntoIterator<Item = S>,
        R: TransitionRule<S, I> + 'static,
    {
        Self::with_rule(states.into_iter().collect(), initial, Arc::new(rule))
    }

    /// Create a machine from an already shared rule.
    pub fn with_rule(
        states: StateSet<S>,
        initial: S,
        rule: Rule<S, I>,
    ) -> Result<Self, ConfigurationError> {
        if states.is_empty() {
            return Err(ConfigurationError::EmptyStates);
        }

        if !states.contains(&initial) {
            return Err(ConfigurationError::UndeclaredInitialState {
                state: initial.name().to_string(),
            });
        }

        Ok(Self {
            states,
            current: initial.clone(),
            initial,
            rule,
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine starts in and resets to (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the declared state set (pure)
    pub fn states(&self) -> &StateSet<S> {
        &self.states
    }

    /// Feed one input to the transition rule and move to the resulting state.
    ///
    /// Returns [`InvalidStateError`] if the rule produced a state outside the
    /// declared set; the current state is left untouched in that case.
    pub fn step(&mut self, input: I) -> Result<(), InvalidStateError> {
        let next = self.rule.transition(&self.current, &input);

        if !self.states.contains(&next) {
            tracing::debug!(
                from = self.current.name(),
                to = next.name(),
                "transition rule produced an undeclared state"
            );
            return Err(InvalidStateError {
                from: self.current.name().to_string(),
                to: next.name().to_string(),
            });
        }

        tracing::trace!(from = self.current.name(), to = next.name(), "transition");
        self.current = next;
        Ok(())
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        tracing::trace!(initial = self.initial.name(), "reset");
        self.current = self.initial.clone();
    }
}

impl<S: EnumerableState, I> StateMachine<S, I> {
    /// Create a machine whose state set is every value of `S`.
    pub fn from_enum<R>(initial: S, rule: R) -> Result<Self, ConfigurationError>
    where
        R: TransitionRule<S, I> + 'static,
    {
        Self::new(S::all(), initial, rule)
    }
}

impl<S: State, I> Clone for StateMachine<S, I> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            initial: self.initial.clone(),
            current: self.current.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<S: State, I> fmt::Debug for StateMachine<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .field("initial", &self.initial)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum WorkflowState {
        Idle,
        Running,
        Done,
        // Never declared to the machine in the tests below.
        Rogue,
    }

    impl State for WorkflowState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
                Self::Rogue => "Rogue",
            }
        }
    }

    impl EnumerableState for WorkflowState {
        fn all() -> Vec<Self> {
            vec![Self::Idle, Self::Running, Self::Done, Self::Rogue]
        }
    }

    fn declared() -> [WorkflowState; 3] {
        [
            WorkflowState::Idle,
            WorkflowState::Running,
            WorkflowState::Done,
        ]
    }

    fn advance(current: &WorkflowState, go: &bool) -> WorkflowState {
        match (current, go) {
            (_, false) => *current,
            (WorkflowState::Idle, true) => WorkflowState::Running,
            (WorkflowState::Running, true) => WorkflowState::Done,
            (other, true) => *other,
        }
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = StateMachine::new(declared(), WorkflowState::Idle, advance).unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Idle);
        assert_eq!(machine.initial_state(), &WorkflowState::Idle);
        assert_eq!(machine.states().len(), 3);
    }

    #[test]
    fn empty_state_set_is_rejected() {
        let result = StateMachine::new(Vec::new(), WorkflowState::Idle, advance);

        assert!(matches!(result, Err(ConfigurationError::EmptyStates)));
    }

    #[test]
    fn undeclared_initial_state_is_rejected() {
        let result = StateMachine::new(declared(), WorkflowState::Rogue, advance);

        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UndeclaredInitialState {
                state: "Rogue".to_string()
            }
        );
    }

    #[test]
    fn step_applies_rule() {
        let mut machine = StateMachine::new(declared(), WorkflowState::Idle, advance).unwrap();

        machine.step(true).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Running);

        machine.step(false).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Running);

        machine.step(true).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Done);
    }

    #[test]
    fn undeclared_result_is_rejected_without_updating_state() {
        let rule = |current: &WorkflowState, input: &u8| match input {
            0 => WorkflowState::Rogue,
            _ => match current {
                WorkflowState::Idle => WorkflowState::Running,
                _ => WorkflowState::Done,
            },
        };
        let mut machine = StateMachine::new(declared(), WorkflowState::Idle, rule).unwrap();

        machine.step(1).unwrap();
        let err = machine.step(0).unwrap_err();

        assert_eq!(
            err,
            InvalidStateError {
                from: "Running".to_string(),
                to: "Rogue".to_string(),
            }
        );
        assert_eq!(machine.current_state(), &WorkflowState::Running);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut machine = StateMachine::new(declared(), WorkflowState::Idle, advance).unwrap();

        machine.step(true).unwrap();
        machine.step(true).unwrap();
        machine.reset();
        assert_eq!(machine.current_state(), &WorkflowState::Idle);

        machine.reset();
        assert_eq!(machine.current_state(), &WorkflowState::Idle);
    }

    #[test]
    fn from_enum_declares_every_variant() {
        let rule = |_: &WorkflowState, _: &()| WorkflowState::Rogue;
        let mut machine = StateMachine::from_enum(WorkflowState::Idle, rule).unwrap();

        assert_eq!(machine.states().len(), 4);
        machine.step(()).unwrap();
        assert_eq!(machine.current_state(), &WorkflowState::Rogue);
    }

    #[test]
    fn clones_advance_independently() {
        let mut machine = StateMachine::new(declared(), WorkflowState::Idle, advance).unwrap();
        let copy = machine.clone();

        machine.step(true).unwrap();

        assert_eq!(machine.current_state(), &WorkflowState::Running);
        assert_eq!(copy.current_state(), &WorkflowState::Idle);
    }
}
