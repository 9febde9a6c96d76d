// ============================================================================
// Float Range Counter
// Counts f32 elements falling inside ranges given as parallel start/end arrays
// ============================================================================

use super::errors::{rejected, require, Argument, ArgumentDefect, CountError, CountResult};
use super::window::Window;

/// Validated parallel range arrays of equal length.
#[derive(Debug, Clone, Copy)]
struct RangePairs<'a> {
    starts: &'a [f32],
    ends: &'a [f32],
}

impl<'a> RangePairs<'a> {
    /// Pair up the start and end arrays.
    ///
    /// # Errors
    /// `InvalidArgument` on `range_start` if the lengths differ.
    fn new(starts: &'a [f32], ends: &'a [f32]) -> CountResult<Self> {
        if starts.len() != ends.len() {
            return Err(CountError::InvalidArgument {
                argument: Argument::RangeStart,
                defect: ArgumentDefect::LengthMismatch {
                    starts: starts.len(),
                    ends: ends.len(),
                },
            });
        }
        Ok(Self { starts, ends })
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Only the first pair is checked for inversion. Later inverted pairs
    /// are accepted and never match.
    ///
    /// # Errors
    /// `InvalidArgument` on `range_end` when `end[0] - start[0] < 0`.
    fn check_first_pair(&self) -> CountResult<()> {
        match (self.starts.first(), self.ends.first()) {
            (Some(&start), Some(&end)) if end - start < 0.0 => Err(CountError::InvalidArgument {
                argument: Argument::RangeEnd,
                defect: ArgumentDefect::InvertedFirstRange,
            }),
            _ => Ok(()),
        }
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = (f32, f32)> + 'a {
        self.starts.iter().copied().zip(self.ends.iter().copied())
    }
}

#[inline]
fn within(value: f32, (start, end): (f32, f32)) -> bool {
    value >= start && value <= end
}

/// Count the elements of `values` lying in at least one range
/// `[range_start[j], range_end[j]]`.
///
/// Each element adds at most one to the total no matter how many ranges
/// it falls in. Repeated values each count independently.
///
/// # Errors
/// - `NullArgument` if any of the three arrays is absent
/// - `InvalidArgument` if the range arrays differ in length, or the first
///   range is inverted (not checked when both range arrays are empty)
///
/// # Example
/// ```
/// use element_counter::counting::float_counter::count_in_ranges;
///
/// let values = [1.0_f32, 2.0, 2.0];
/// assert_eq!(count_in_ranges(Some(&values[..]), Some(&[1.0][..]), Some(&[2.5][..])), Ok(3));
/// ```
pub fn count_in_ranges(
    values: Option<&[f32]>,
    range_start: Option<&[f32]>,
    range_end: Option<&[f32]>,
) -> CountResult<usize> {
    const OPERATION: &str = "count_in_ranges";

    let (values, pairs) =
        validate(values, range_start, range_end).map_err(|e| rejected(OPERATION, e))?;

    if pairs.is_empty() {
        return Ok(0);
    }

    pairs
        .check_first_pair()
        .map_err(|e| rejected(OPERATION, e))?;

    let matched: usize = values
        .iter()
        .filter(|&&value| pairs.iter().any(|pair| within(value, pair)))
        .count();

    tracing::trace!(
        operation = OPERATION,
        scanned = values.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

/// Windowed form of [`count_in_ranges`] over
/// `values[start_index..start_index + count]`.
///
/// Unlike [`count_in_ranges`], every range an element falls in adds one to
/// the total, so an element inside three overlapping ranges contributes
/// three.
///
/// # Errors
/// Checked in this order, the first failure wins:
/// - `NullArgument` if any of the three arrays is absent
/// - `RangeError` if `start_index` is negative
/// - `InvalidArgument` if the range arrays differ in length
/// - `InvalidArgument` if the first range is inverted (not checked when
///   both range arrays are empty)
/// - `RangeError` for the rest of the window bounds (see [`Window::resolve`])
pub fn count_in_ranges_windowed(
    values: Option<&[f32]>,
    range_start: Option<&[f32]>,
    range_end: Option<&[f32]>,
    start_index: i64,
    count: i64,
) -> CountResult<usize> {
    const OPERATION: &str = "count_in_ranges_windowed";

    let (window, pairs) = validate_windowed(
        values,
        range_start,
        range_end,
        Window::new(start_index, count),
    )
    .map_err(|e| rejected(OPERATION, e))?;

    if pairs.is_empty() {
        return Ok(0);
    }

    let matched: usize = window
        .iter()
        .map(|&value| pairs.iter().filter(|&pair| within(value, pair)).count())
        .sum();

    tracing::trace!(
        operation = OPERATION,
        scanned = window.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

type Arrays<'a> = (&'a [f32], &'a [f32], &'a [f32]);

fn require_all<'a>(
    values: Option<&'a [f32]>,
    range_start: Option<&'a [f32]>,
    range_end: Option<&'a [f32]>,
) -> CountResult<Arrays<'a>> {
    let values = require(values, Argument::Values)?;
    let starts = require(range_start, Argument::RangeStart)?;
    let ends = require(range_end, Argument::RangeEnd)?;
    Ok((values, starts, ends))
}

fn validate<'a>(
    values: Option<&'a [f32]>,
    range_start: Option<&'a [f32]>,
    range_end: Option<&'a [f32]>,
) -> CountResult<(&'a [f32], RangePairs<'a>)> {
    let (values, starts, ends) = require_all(values, range_start, range_end)?;
    let pairs = RangePairs::new(starts, ends)?;
    Ok((values, pairs))
}

/// Validation for the windowed form. The empty-ranges shortcut is left to
/// the caller so that it only applies to an in-bounds window.
fn validate_windowed<'a>(
    values: Option<&'a [f32]>,
    range_start: Option<&'a [f32]>,
    range_end: Option<&'a [f32]>,
    window: Window,
) -> CountResult<(&'a [f32], RangePairs<'a>)> {
    let (values, starts, ends) = require_all(values, range_start, range_end)?;
    window.check_start()?;
    let pairs = RangePairs::new(starts, ends)?;
    pairs.check_first_pair()?;
    let span = window.resolve(values.len())?;
    Ok((&values[span], pairs))
}
