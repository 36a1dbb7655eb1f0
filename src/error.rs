//! Error types for the multical crate.

use crate::chronology::Chronology;
use crate::types::Field;

/// Error type for all fallible operations in the multical crate.
///
/// All of these are local validation failures of a pure computation;
/// retrying an operation that failed will fail again the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A field value outside its chronology-specific valid range.
    #[error("invalid value for {field}: {value} (must be {min}..={max})")]
    InvalidFieldValue {
        /// The field that was being set or validated.
        field: Field,
        /// The rejected value.
        value: i64,
        /// Smallest valid value (inclusive).
        min: i64,
        /// Largest valid value (inclusive).
        max: i64,
    },

    /// A field name outside the supported set.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// A unit name outside the supported set, or a unit an operation doesn't accept.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// An add or multiply left the representable year range.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// An unrecognized chronology identifier.
    #[error("unknown chronology: {0:?}")]
    UnknownChronology(String),

    /// Two dates of different chronologies were combined.
    #[error("chronology mismatch: expected {expected}, found {found}")]
    ChronologyMismatch {
        /// Chronology of the receiving date.
        expected: Chronology,
        /// Chronology of the argument.
        found: Chronology,
    },
}
