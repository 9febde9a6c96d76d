// ============================================================================
// Counting Errors
// Error types for argument validation in the counting operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names the parameter a [`CountError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Argument {
    /// The sequence being scanned
    Values,
    /// The set of decimal range specs
    Ranges,
    /// A single entry of the decimal range set, by position
    RangeEntry(usize),
    /// Parallel array of float range starts
    RangeStart,
    /// Parallel array of float range ends
    RangeEnd,
    /// The integers searched for
    Needles,
    /// Window start
    StartIndex,
    /// Window length
    Count,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Values => write!(f, "values"),
            Argument::Ranges => write!(f, "ranges"),
            Argument::RangeEntry(index) => write!(f, "ranges[{}]", index),
            Argument::RangeStart => write!(f, "range_start"),
            Argument::RangeEnd => write!(f, "range_end"),
            Argument::Needles => write!(f, "needles"),
            Argument::StartIndex => write!(f, "start_index"),
            Argument::Count => write!(f, "count"),
        }
    }
}

/// Structural problems with an otherwise present argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArgumentDefect {
    /// A range entry holds neither zero nor two bounds
    MalformedRange { len: usize },
    /// Range start and range end arrays differ in length
    LengthMismatch { starts: usize, ends: usize },
    /// The first float range has its end below its start
    InvertedFirstRange,
}

impl fmt::Display for ArgumentDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentDefect::MalformedRange { len } => {
                write!(f, "range has {} bounds, expected 0 or 2", len)
            },
            ArgumentDefect::LengthMismatch { starts, ends } => write!(
                f,
                "{} range starts but {} range ends",
                starts, ends
            ),
            ArgumentDefect::InvertedFirstRange => {
                write!(f, "first range start is greater than its end")
            },
        }
    }
}

/// Which window bound a windowed call violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowViolation {
    /// start_index < 0
    NegativeStart,
    /// start_index > values.len()
    StartPastEnd,
    /// count < 0
    NegativeCount,
    /// start_index + count > values.len()
    WindowOverrun,
}

impl fmt::Display for WindowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowViolation::NegativeStart => write!(f, "start index is negative"),
            WindowViolation::StartPastEnd => {
                write!(f, "start index is greater than the length of the values")
            },
            WindowViolation::NegativeCount => write!(f, "count is less than zero"),
            WindowViolation::WindowOverrun => write!(
                f,
                "start index plus count exceeds the length of the values"
            ),
        }
    }
}

/// Errors that can occur while validating a counting request.
///
/// Validation is fail-fast: the first violated check is reported and no
/// scanning takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CountError {
    /// A required sequence is absent
    NullArgument { argument: Argument },
    /// A sequence is present but structurally malformed
    InvalidArgument {
        argument: Argument,
        defect: ArgumentDefect,
    },
    /// A window index or count lies outside the searched sequence
    RangeError {
        argument: Argument,
        violation: WindowViolation,
    },
}

impl CountError {
    /// The parameter this error refers to.
    pub fn argument(&self) -> Argument {
        match self {
            CountError::NullArgument { argument }
            | CountError::InvalidArgument { argument, .. }
            | CountError::RangeError { argument, .. } => *argument,
        }
    }

    pub fn is_null_argument(&self) -> bool {
        matches!(self, CountError::NullArgument { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CountError::InvalidArgument { .. })
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, CountError::RangeError { .. })
    }
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::NullArgument { argument } => {
                write!(f, "null argument: `{}` is absent", argument)
            },
            CountError::InvalidArgument { argument, defect } => {
                write!(f, "invalid argument `{}`: {}", argument, defect)
            },
            CountError::RangeError {
                argument,
                violation,
            } => write!(f, "argument `{}` out of range: {}", argument, violation),
        }
    }
}

impl std::error::Error for CountError {}

/// Result type alias for counting operations
pub type CountResult<T> = Result<T, CountError>;

/// Unwrap a required argument or report it as absent.
#[inline]
pub(crate) fn require<T: ?Sized>(value: Option<&T>, argument: Argument) -> CountResult<&T> {
    value.ok_or(CountError::NullArgument { argument })
}

/// Emit the rejection event for a failed call and hand the error back.
pub(crate) fn rejected(operation: &'static str, error: CountError) -> CountError {
    tracing::debug!(operation, %error, "count request rejected");
    error
}
