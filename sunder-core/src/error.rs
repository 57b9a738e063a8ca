//! Error types for argument validation
//!
//! Every failure is raised when a cursor is requested, before the first
//! segment is produced. Matching and slicing never fail.

use thiserror::Error;

/// Errors reported by the segmentation entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Segment budget below zero
    #[error("segment count must be non-negative, got {count}")]
    NegativeCount {
        /// The rejected count
        count: isize,
    },

    /// Exceed-behavior value outside the defined enumeration
    #[error("undefined exceed behavior {value}; valid values are: {valid}")]
    InvalidExceedBehavior {
        /// The rejected raw value
        value: i32,
        /// Names of the defined members
        valid: &'static str,
    },

    /// Refinement options carrying bits outside the defined flags
    #[error("undefined split option bits {bits:#06b}")]
    InvalidOptions {
        /// The offending bits (defined flags masked out)
        bits: u32,
    },
}

/// Result type for segmentation requests
pub type Result<T> = std::result::Result<T, SplitError>;
