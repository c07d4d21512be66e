//! Acceptance-based automaton built on the generic state machine.

use crate::core::{EnumerableState, State, StateSet, TransitionRule};
use crate::machine::{ConfigurationError, InvalidStateError, Rule, StateMachine};
use std::fmt;
use std::sync::Arc;

/// Deterministic finite automaton.
///
/// Wraps a [`StateMachine`] and a set of accept states, which must be a
/// non-empty subset of the machine's states. [`Dfa::accepts`] is recomputed on
/// every call.
///
/// # Example
///
/// ```rust
/// use automa::core::State;
/// use automa::dfa::Dfa;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Seen { Nothing, Letter }
///
/// impl State for Seen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Nothing => "Nothing",
///             Self::Letter => "Letter",
///         }
///     }
/// }
///
/// let mut dfa = Dfa::with_accept_state(
///     [Seen::Nothing, Seen::Letter],
///     Seen::Letter,
///     Seen::Nothing,
///     |current: &Seen, c: &char| {
///         if c.is_alphabetic() { Seen::Letter } else { current.clone() }
///     },
/// )
/// .unwrap();
///
/// assert!(!dfa.accepts());
/// assert!(dfa.run("12a3".chars()).unwrap());
/// assert!(!dfa.run("123".chars()).unwrap());
/// ```
pub struct Dfa<S: State, I> {
    machine: StateMachine<S, I>,
    accept: StateSet<S>,
}

impl<S: State, I> Dfa<S, I> {
    /// Create an automaton over an explicit state set.
    ///
    /// Fails if `states` is empty, `initial` is not a member, `accept` is
    /// empty, or any accept state is not a member.
    pub fn new<T, A, R>(
        states: T,
        accept: A,
        initial: S,
        rule: R,
    ) -> Result<Self, ConfigurationError>
    where
        T: IntoIterator<Item = S>,
        A: IntoIterator<Item = S>,
        R: TransitionRule<S, I> + 'static,
    {
        Self::with_rule(
            states.into_iter().collect(),
            accept.into_iter().collect(),
            initial,
            Arc::new(rule),
        )
    }

    /// Create an automaton with a single accept state.
    pub fn with_accept_state<T, R>(
        states: T,
        accept: S,
        initial: S,
        rule: R,
    ) -> Result<Self, ConfigurationError>
    where
        T: IntoIterator<Item = S>,
        R: TransitionRule<S, I> + 'static,
    {
        Self::new(states, [accept], initial, rule)
    }

    /// Create an automaton from an already shared rule.
    pub fn with_rule(
        states: StateSet<S>,
        accept: StateSet<S>,
        initial: S,
        rule: Rule<S, I>,
    ) -> Result<Self, ConfigurationError> {
        let machine = StateMachine::with_rule(states, initial, rule)?;

        if accept.is_empty() {
            return Err(ConfigurationError::EmptyAcceptStates);
        }

        if let Some(stray) = accept.first_outside(machine.states()) {
            return Err(ConfigurationError::UndeclaredAcceptState {
                state: stray.name().to_string(),
            });
        }

        Ok(Self { machine, accept })
    }

    /// Check whether the current state is an accept state (pure)
    pub fn accepts(&self) -> bool {
        self.accept.contains(self.machine.current_state())
    }

    /// Get the accept states (pure)
    pub fn accept_states(&self) -> &StateSet<S> {
        &self.accept
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        self.machine.current_state()
    }

    /// Get the state the automaton starts in and resets to (pure)
    pub fn initial_state(&self) -> &S {
        self.machine.initial_state()
    }

    /// Get the declared state set (pure)
    pub fn states(&self) -> &StateSet<S> {
        self.machine.states()
    }

    /// Borrow the underlying state machine.
    pub fn machine(&self) -> &StateMachine<S, I> {
        &self.machine
    }

    /// Feed one input. See [`StateMachine::step`].
    pub fn step(&mut self, input: I) -> Result<(), InvalidStateError> {
        self.machine.step(input)
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Reset, feed every input in order, and report acceptance.
    ///
    /// Stops at the first rejected transition and returns its error.
    pub fn run<T>(&mut self, inputs: T) -> Result<bool, InvalidStateError>
    where
        T: IntoIterator<Item = I>,
    {
        self.reset();
        for input in inputs {
            self.step(input)?;
        }
        Ok(self.accepts())
    }
}

impl<S: EnumerableState, I> Dfa<S, I> {
    /// Create an automaton whose state set is every value of `S`.
    pub fn from_enum<A, R>(accept: A, initial: S, rule: R) -> Result<Self, ConfigurationError>
    where
        A: IntoIterator<Item = S>,
        R: TransitionRule<S, I> + 'static,
    {
        Self::new(S::all(), accept, initial, rule)
    }

    /// Create an automaton over every value of `S` with a single accept state.
    pub fn from_enum_with_accept_state<R>(
        accept: S,
        initial: S,
        rule: R,
    ) -> Result<Self, ConfigurationError>
    where
        R: TransitionRule<S, I> + 'static,
    {
        Self::from_enum([accept], initial, rule)
    }
}

impl<S: State, I> Clone for Dfa<S, I> {
    fn clone(&self) -> Self {
        Self {
            machine: self.machine.clone(),
            accept: self.accept.clone(),
        }
    }
}

impl<S: State, I> fmt::Debug for Dfa<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("machine", &self.machine)
            .field("accept", &self.accept)
            .finish()
    }
}
