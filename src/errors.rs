//! Error types for building and mutating [crate::word::Word] values.
//!
//! Card parsing and deck classification are total and have no error type.

use crate::word::WordField;

/// Errors produced when a [crate::word::Word] is constructed or assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// A 12-bit subfield was given a value above 4095.
    #[error("{field} field value {value} does not fit in 12 bits")]
    InvalidFieldValue { field: WordField, value: u16 },
    /// The composite word value does not fit in 48 bits.
    #[error("word value {0} does not fit in 48 bits")]
    ValueOutOfRange(u64),
}
