//! Small value types used alongside automata.
//!
//! Nothing here is required by the engine itself. [`Optional`] is the usual
//! input type for automata that need an end-of-input marker, and
//! [`Interval`] describes closed ranges such as character classes.

mod interval;
mod optional;

pub use interval::{Interval, IntervalError};
pub use optional::{EmptyValueError, Optional};
