//! Error types for grid construction.

use std::fmt;

/// Errors from building a grid out of host-supplied data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A flat coordinate array does not match the declared dimensions.
    CoordLengthMismatch {
        /// Which coordinate array was malformed (`"x"` or `"y"`).
        axis: &'static str,
        /// Expected element count (`ni * nj`).
        expected: usize,
        /// Actual element count received.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordLengthMismatch {
                axis,
                expected,
                actual,
            } => write!(
                f,
                "{axis} coordinate array has {actual} elements, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
