//! Binary string parity classifier.
//!
//! A small automaton over the characters `'0'` and `'1'`, fed one character
//! at a time and then an end-of-input marker. It ends in [`ParityState::Odd`]
//! when the last digit is `1` and in [`ParityState::Even`] when it is `0`.
//! Any other character, or an empty input, lands in the
//! [`ParityState::Reject`] trap.
//!
//! # Example
//!
//! ```rust
//! use automa::parity::ParityMatcher;
//!
//! let mut odd = ParityMatcher::odd();
//! let mut even = ParityMatcher::even();
//!
//! assert!(odd.matches("1011").unwrap());
//! assert!(even.matches("110").unwrap());
//! assert!(!odd.matches("").unwrap());
//! assert!(!even.matches("12").unwrap());
//! ```

use crate::core::TransitionRule;
use crate::dfa::Dfa;
use crate::machine::InvalidStateError;
use crate::state_enum;
use crate::util::Optional;

state_enum! {
    /// States of the parity classifier.
    pub enum ParityState {
        Start,
        Even,
        Odd,
        Reject,
    }
}

/// Classification of a whole input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
    Neither,
}

/// Transition rule of the classifier.
///
/// `Optional::Empty` is the end-of-input marker. It keeps `Even` and `Odd`
/// where they are and sends `Start` to `Reject`, since an empty string has
/// no parity.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParityRule;

impl TransitionRule<ParityState, Optional<char>> for ParityRule {
    fn transition(&self, current: &ParityState, input: &Optional<char>) -> ParityState {
        match (current, input) {
            (ParityState::Reject, _) => ParityState::Reject,
            (_, Optional::Value('0')) => ParityState::Even,
            (_, Optional::Value('1')) => ParityState::Odd,
            (_, Optional::Value(_)) => ParityState::Reject,
            (ParityState::Start, Optional::Empty) => ParityState::Reject,
            (settled, Optional::Empty) => *settled,
        }
    }
}

/// Automaton accepting binary strings of one parity.
#[derive(Clone, Debug)]
pub struct ParityMatcher {
    dfa: Dfa<ParityState, Optional<char>>,
}

impl ParityMatcher {
    /// Matcher accepting strings ending in `1`.
    pub fn odd() -> Self {
        Self::accepting(ParityState::Odd)
    }

    /// Matcher accepting strings ending in `0`.
    pub fn even() -> Self {
        Self::accepting(ParityState::Even)
    }

    fn accepting(accept: ParityState) -> Self {
        let dfa = Dfa::from_enum_with_accept_state(accept, ParityState::Start, ParityRule)
            .expect("Parity automaton should always build");
        Self { dfa }
    }

    /// Feed one input symbol, or `Optional::Empty` to mark the end of input.
    pub fn step(&mut self, input: Optional<char>) -> Result<(), InvalidStateError> {
        self.dfa.step(input)
    }

    /// Return to `ParityState::Start`.
    pub fn reset(&mut self) {
        self.dfa.reset();
    }

    /// Check whether the current state is this matcher's accept state.
    pub fn accepts(&self) -> bool {
        self.dfa.accepts()
    }

    /// Get current state
    pub fn current_state(&self) -> ParityState {
        *self.dfa.current_state()
    }

    /// Reset, feed every character of `input` followed by the end-of-input
    /// marker, and report acceptance.
    pub fn matches(&mut self, input: &str) -> Result<bool, InvalidStateError> {
        let symbols = input
            .chars()
            .map(Optional::value)
            .chain(std::iter::once(Optional::empty()));
        self.dfa.run(symbols)
    }
}

/// Classify `input` with a pair of matchers, odd first.
pub fn classify(
    odd: &mut ParityMatcher,
    even: &mut ParityMatcher,
    input: &str,
) -> Result<Parity, InvalidStateError> {
    if odd.matches(input)? {
        Ok(Parity::Odd)
    } else if even.matches(input)? {
        Ok(Parity::Even)
    } else {
        Ok(Parity::Neither)
    }
}
