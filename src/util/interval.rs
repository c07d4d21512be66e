//! Closed intervals over totally ordered values.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building or combining intervals.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval minimum {min} is greater than maximum {max}")]
    Inverted { min: String, max: String },

    #[error("Intervals have no intersection")]
    Disjoint,
}

/// The closed range `[min, max]`.
///
/// # Example
///
/// ```rust
/// use automa::util::Interval;
///
/// let digits = Interval::new('0', '9').unwrap();
/// let low = Interval::new('0', '4').unwrap();
///
/// assert!(digits.contains(&'7'));
/// assert!(digits.contains_interval(&low));
/// assert_eq!(digits.to_string(), "Interval[0,9]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: Ord + fmt::Debug> Interval<T> {
    /// Build `[min, max]`, failing when `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, IntervalError> {
        if min > max {
            return Err(IntervalError::Inverted {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Check whether `min <= value <= max`.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Check whether `other` lies entirely inside `self`.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }
}

impl<T: Ord + Clone + fmt::Debug> Interval<T> {
    /// The interval holding exactly one value.
    pub fn point(value: T) -> Self {
        Self {
            min: value.clone(),
            max: value,
        }
    }

    /// The overlap of two intervals.
    pub fn intersect(&self, other: &Interval<T>) -> Result<Interval<T>, IntervalError> {
        if self.max < other.min || self.min > other.max {
            return Err(IntervalError::Disjoint);
        }

        let min = std::cmp::max(&self.min, &other.min).clone();
        let max = std::cmp::min(&self.max, &other.max).clone();
        Interval::new(min, max)
    }
}

// Bounds are checked the same way as `Interval::new`.
impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Deserialize<'de> + Ord + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Bounds<B> {
            min: B,
            max: B,
        }

        let Bounds { min, max } = Bounds::<T>::deserialize(deserializer)?;
        Interval::new(min, max).map_err(de::Error::custom)
    }
}

/// Formats as `Interval[min,max]`. The element type is not printed.
impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interval[{},{}]", self.min, self.max)
    }
}
