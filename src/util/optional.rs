//! Optional input symbols with an explicit end-of-input case.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reading the value of an empty [`Optional`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Optional has no value")]
pub struct EmptyValueError;

/// Either a concrete symbol or no symbol at all.
///
/// Automata use `Optional<T>` as their input type when the alphabet `T`
/// needs an extra end-of-input marker: [`Optional::Empty`] tells the
/// transition rule that no more symbols follow.
///
/// # Example
///
/// ```rust
/// use automa::util::{EmptyValueError, Optional};
///
/// let symbol: Optional<char> = 'a'.into();
/// assert_eq!(symbol.get(), Ok(&'a'));
///
/// let end: Optional<char> = Optional::empty();
/// assert!(!end.has_value());
/// assert_eq!(end.get(), Err(EmptyValueError));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    /// A concrete symbol.
    Value(T),
    /// No symbol; marks the end of the input.
    #[default]
    Empty,
}

impl<T> Optional<T> {
    /// Wrap a concrete symbol.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// The end-of-input marker.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// `Some` becomes `Value`, `None` becomes `Empty`.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Value(value),
            None => Self::Empty,
        }
    }

    /// Check whether a symbol is present.
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrow the symbol, failing if there is none.
    pub fn get(&self) -> Result<&T, EmptyValueError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Empty => Err(EmptyValueError),
        }
    }

    /// Take the symbol, failing if there is none.
    pub fn into_inner(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Empty => Err(EmptyValueError),
        }
    }

    /// Convert back into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_readable() {
        let symbol = Optional::value('1');

        assert!(symbol.has_value());
        assert_eq!(symbol.get(), Ok(&'1'));
        assert_eq!(symbol.into_inner(), Ok('1'));
    }

    #[test]
    fn empty_read_fails() {
        let end: Optional<char> = Optional::empty();

        assert!(!end.has_value());
        assert_eq!(end.get(), Err(EmptyValueError));
        assert_eq!(end.into_inner(), Err(EmptyValueError));
        assert_eq!(
            EmptyValueError.to_string(),
            "Optional has no value".to_string()
        );
    }

    #[test]
    fn equality_compares_contents() {
        assert_eq!(Optional::value(3), Optional::value(3));
        assert_ne!(Optional::value(3), Optional::value(4));
        assert_ne!(Optional::value(3), Optional::empty());
        assert_eq!(Optional::<u8>::empty(), Optional::empty());
    }

    #[test]
    fn converts_from_option() {
        assert_eq!(Optional::from_option(Some('x')), Optional::value('x'));
        assert_eq!(Optional::<char>::from_option(None), Optional::Empty);
        assert_eq!(Optional::value('y').into_option(), Some('y'));
        assert_eq!(Optional::<char>::default(), Optional::Empty);
    }

    #[test]
    fn optional_serializes_correctly() {
        let symbol = Optional::value('0');
        let json = serde_json::to_string(&symbol).unwrap();
        let deserialized: Optional<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, deserialized);
    }
}
