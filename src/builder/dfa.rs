//! Builder for constructing deterministic finite automata.

use crate::builder::machine::StateMachineBuilder;
use crate::core::{EnumerableState, State, TransitionRule};
use crate::dfa::Dfa;
use crate::machine::{ConfigurationError, Rule};

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```
/// use automa::builder::DfaBuilder;
/// use automa::state_enum;
///
/// state_enum! {
///     enum Ab {
///         ExpectA,
///         ExpectB,
///         Dead,
///     }
/// }
///
/// // (ab)*
/// let mut dfa = DfaBuilder::new()
///     .all_states()
///     .initial(Ab::ExpectA)
///     .accept(Ab::ExpectA)
///     .rule(|current: &Ab, c: &char| match (current, c) {
///         (Ab::ExpectA, 'a') => Ab::ExpectB,
///         (Ab::ExpectB, 'b') => Ab::ExpectA,
///         _ => Ab::Dead,
///     })
///     .build()
///     .unwrap();
///
/// assert!(dfa.run("abab".chars()).unwrap());
/// assert!(!dfa.run("aba".chars()).unwrap());
/// ```
pub struct DfaBuilder<S: State, I> {
    machine: StateMachineBuilder<S, I>,
    accept: Vec<S>,
}

impl<S: State, I> DfaBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            machine: StateMachineBuilder::new(),
            accept: Vec::new(),
        }
    }

    /// Add a single state to the declared set.
    pub fn state(mut self, state: S) -> Self {
        self.machine = self.machine.state(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<T>(mut self, states: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        self.machine = self.machine.states(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.machine = self.machine.initial(state);
        self
    }

    /// Add an accept state (at least one is required).
    pub fn accept(mut self, state: S) -> Self {
        self.accept.push(state);
        self
    }

    /// Add multiple accept states at once.
    pub fn accept_all<T>(mut self, states: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        self.accept.extend(states);
        self
    }

    /// Set the transition rule (required).
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: TransitionRule<S, I> + 'static,
    {
        self.machine = self.machine.rule(rule);
        self
    }

    /// Use a rule that is already shared with other automata.
    pub fn shared_rule(mut self, rule: Rule<S, I>) -> Self {
        self.machine = self.machine.shared_rule(rule);
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing or inconsistent.
    pub fn build(self) -> Result<Dfa<S, I>, ConfigurationError> {
        let initial = self
            .machine
            .initial
            .ok_or(ConfigurationError::MissingInitialState)?;
        let rule = self
            .machine
            .rule
            .ok_or(ConfigurationError::MissingTransitionRule)?;

        Dfa::with_rule(
            self.machine.states.into_iter().collect(),
            self.accept.into_iter().collect(),
            initial,
            rule,
        )
    }
}

impl<S: EnumerableState, I> DfaBuilder<S, I> {
    /// Declare every value of `S` as a state.
    pub fn all_states(mut self) -> Self {
        self.machine = self.machine.all_states();
        self
    }
}

impl<S: State, I> Default for DfaBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
