// ============================================================================
// Search Window
// Resolves a caller-supplied start index and count against a sequence length
// ============================================================================

use super::errors::{Argument, CountError, CountResult, WindowViolation};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `[start_index, start_index + count)` section of a searched sequence.
///
/// Both fields are signed so that negative inputs can be rejected with
/// their own cause instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    start_index: i64,
    count: i64,
}

impl Window {
    #[inline]
    pub const fn new(start_index: i64, count: i64) -> Self {
        Self { start_index, count }
    }

    /// Window covering every element of a sequence of length `len`.
    #[inline]
    pub fn full(len: usize) -> Self {
        Self::new(0, i64::try_from(len).unwrap_or(i64::MAX))
    }

    #[inline]
    pub const fn start_index(&self) -> i64 {
        self.start_index
    }

    #[inline]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Reject a negative start index without looking at the sequence.
    ///
    /// # Errors
    /// `RangeError` naming `start_index` with `NegativeStart`.
    #[inline]
    pub fn check_start(self) -> CountResult<()> {
        if self.start_index < 0 {
            return Err(violation(Argument::StartIndex, WindowViolation::NegativeStart));
        }
        Ok(())
    }

    /// Check the window against a sequence of length `len`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// negative start, start past the end, negative count, overrun.
    ///
    /// # Errors
    /// `RangeError` naming `start_index` or `count` with the violated bound.
    pub fn resolve(self, len: usize) -> CountResult<Range<usize>> {
        let len = i64::try_from(len).unwrap_or(i64::MAX);

        self.check_start()?;

        if self.start_index > len {
            return Err(violation(Argument::StartIndex, WindowViolation::StartPastEnd));
        }

        if self.count < 0 {
            return Err(violation(Argument::Count, WindowViolation::NegativeCount));
        }

        // Overflowing the sum can only mean the window runs past the end.
        match self.start_index.checked_add(self.count) {
            Some(end) if end <= len => Ok(self.start_index as usize..end as usize),
            _ => Err(violation(Argument::Count, WindowViolation::WindowOverrun)),
        }
    }
}

#[inline]
fn violation(argument: Argument, violation: WindowViolation) -> CountError {
    CountError::RangeError {
        argument,
        violation,
    }
}
