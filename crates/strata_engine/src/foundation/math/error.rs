//! Errors raised by checked vector and matrix construction and access

use thiserror::Error;

/// Shape and bounds violations in the linear algebra types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A literal list or column list had the wrong number of entries
    #[error("incorrect size: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Entries the target type holds
        expected: usize,
        /// Entries supplied
        actual: usize,
    },

    /// Widening was attempted from a vector that is not strictly shorter
    #[error("cannot widen a {from}-component vector into a {to}-component vector")]
    WidenFromLarger {
        /// Length of the source vector
        from: usize,
        /// Length of the target vector
        to: usize,
    },

    /// An element, column, or row index was outside the valid range
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid indices
        len: usize,
    },
}
