//! Closed, non-empty sets of states.

use super::state::State;

/// A fixed set of legal states.
///
/// Duplicates are collapsed on construction, and insertion order is kept
/// for the remaining members. Membership is checked by equality, so state
/// types only need `PartialEq`. Two sets are equal when they hold the same
/// members, whatever their order.
///
/// A `StateSet` may be empty; machines reject empty sets when they are
/// constructed.
///
/// # Example
///
/// ```rust
/// use automa::core::{State, StateSet};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Light { Red, Green }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// let set = StateSet::from_iter([Light::Red, Light::Red, Light::Green]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&Light::Green));
/// ```
#[derive(Clone, Debug)]
pub struct StateSet<S: State> {
    members: Vec<S>,
}

impl<S: State> StateSet<S> {
    /// Check whether `state` belongs to the set.
    pub fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &StateSet<S>) -> bool {
        self.members.iter().all(|s| other.contains(s))
    }

    /// First member of `self` missing from `other`, if any.
    pub(crate) fn first_outside(&self, other: &StateSet<S>) -> Option<&S> {
        self.members.iter().find(|s| !other.contains(s))
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.members.iter()
    }
}

impl<S: State> PartialEq for StateSet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<S: State> FromIterator<S> for StateSet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut members: Vec<S> = Vec::new();
        for state in iter {
            if !members.contains(&state) {
                members.push(state);
            }
        }
        Self { members }
    }
}

impl<'a, S: State> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        A,
        B,
        C,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
                Self::C => "C",
            }
        }
    }

    #[test]
    fn duplicates_collapse() {
        let set = StateSet::from_iter([TestState::A, TestState::B, TestState::A]);

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().cloned().collect::<Vec<_>>(),
            vec![TestState::A, TestState::B]
        );
    }

    #[test]
    fn empty_set_reports_empty() {
        let set: StateSet<TestState> = StateSet::from_iter(Vec::new());

        assert!(set.is_empty());
        assert!(!set.contains(&TestState::A));
    }

    #[test]
    fn subset_checks_every_member() {
        let all = StateSet::from_iter([TestState::A, TestState::B, TestState::C]);
        let some = StateSet::from_iter([TestState::C, TestState::A]);
        let other = StateSet::from_iter([TestState::A, TestState::B]);

        assert!(some.is_subset(&all));
        assert!(!some.is_subset(&other));
        assert_eq!(some.first_outside(&other), Some(&TestState::C));
        assert_eq!(some.first_outside(&all), None);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward = StateSet::from_iter([TestState::A, TestState::B]);
        let backward = StateSet::from_iter([TestState::B, TestState::A, TestState::B]);
        let larger = StateSet::from_iter([TestState::B, TestState::A, TestState::C]);

        assert_eq!(forward, backward);
        assert_ne!(forward, larger);
        assert_ne!(larger, forward);
    }
}
