//! Builder for constructing state machines.

use crate::core::{EnumerableState, State, TransitionRule};
use crate::machine::{ConfigurationError, Rule, StateMachine};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, I> {
    pub(crate) states: Vec<S>,
    pub(crate) initial: Option<S>,
    pub(crate) rule: Option<Rule<S, I>>,
}

impl<S: State, I> StateMachineBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            rule: None,
        }
    }

    /// Add a single state to the declared set.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states<T>(mut self, states: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the transition rule (required).
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: TransitionRule<S, I> + 'static,
    {
        self.rule = Some(Arc::new(rule));
        self
    }

    /// Use a rule that is already shared with other machines.
    pub fn shared_rule(mut self, rule: Rule<S, I>) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or inconsistent.
    pub fn build(self) -> Result<StateMachine<S, I>, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::MissingInitialState)?;
        let rule = self.rule.ok_or(ConfigurationError::MissingTransitionRule)?;

        StateMachine::with_rule(self.states.into_iter().collect(), initial, rule)
    }
}

impl<S: EnumerableState, I> StateMachineBuilder<S, I> {
    /// Declare every value of `S` as a state.
    pub fn all_states(self) -> Self {
        self.states(S::all())
    }
}

impl<S: State, I> Default for StateMachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::InvalidStateError;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    fn forward(current: &TestState, _: &()) -> TestState {
        match current {
            TestState::Initial => TestState::Processing,
            _ => TestState::Complete,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<TestState, ()>::new()
            .all_states()
            .rule(forward)
            .build();

        assert!(matches!(result, Err(ConfigurationError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_rule() {
        let result = StateMachineBuilder::<TestState, ()>::new()
            .all_states()
            .initial(TestState::Initial)
            .build();

        assert!(matches!(
            result,
            Err(ConfigurationError::MissingTransitionRule)
        ));
    }

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::new()
            .initial(TestState::Initial)
            .rule(forward)
            .build();

        assert!(matches!(result, Err(ConfigurationError::EmptyStates)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = StateMachineBuilder::new()
            .state(TestState::Initial)
            .states([TestState::Processing, TestState::Complete])
            .initial(TestState::Initial)
            .rule(forward)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &TestState::Initial);
        machine.step(()).unwrap();
        machine.step(()).unwrap();
        assert_eq!(machine.current_state(), &TestState::Complete);
    }

    #[test]
    fn partial_state_list_rejects_escaping_rule() {
        let mut machine = StateMachineBuilder::new()
            .states([TestState::Initial, TestState::Processing])
            .initial(TestState::Initial)
            .rule(forward)
            .build()
            .unwrap();

        machine.step(()).unwrap();
        assert_eq!(
            machine.step(()),
            Err(InvalidStateError {
                from: "Processing".to_string(),
                to: "Complete".to_string(),
            })
        );
    }

    #[test]
    fn shared_rule_drives_several_machines() {
        let rule: Rule<TestState, ()> = Arc::new(forward);

        let mut first = StateMachineBuilder::new()
            .all_states()
            .initial(TestState::Initial)
            .shared_rule(Arc::clone(&rule))
            .build()
            .unwrap();
        let second = StateMachineBuilder::new()
            .all_states()
            .initial(TestState::Processing)
            .shared_rule(rule)
            .build()
            .unwrap();

        first.step(()).unwrap();
        assert_eq!(first.current_state(), second.current_state());
    }
}
