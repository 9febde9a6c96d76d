// ============================================================================
// Integer Membership Counter
// Cross-product tally of values equal to any element of a needle array
// ============================================================================

use super::errors::{rejected, require, Argument, CountResult};
use super::window::Window;

/// Number of `(value, needle)` pairs that are equal.
#[inline]
fn tally(values: &[i32], needles: &[i32]) -> usize {
    values
        .iter()
        .map(|value| needles.iter().filter(|&needle| needle == value).count())
        .sum()
}

/// Count every pair `(i, j)` with `values[i] == needles[j]`.
///
/// This is a full cross-product tally: a value occurring twice in `values`
/// that also occurs twice in `needles` contributes four.
///
/// # Errors
/// `NullArgument` if `values` or `needles` is absent.
///
/// # Example
/// ```
/// use element_counter::counting::integer_counter::count_matches;
///
/// let values = [1, 2, 2, 3];
/// let needles = [2, 2];
/// assert_eq!(count_matches(Some(&values[..]), Some(&needles[..])), Ok(4));
/// ```
pub fn count_matches(values: Option<&[i32]>, needles: Option<&[i32]>) -> CountResult<usize> {
    const OPERATION: &str = "count_matches";

    let (values, needles) = validate(values, needles).map_err(|e| rejected(OPERATION, e))?;
    let matched = tally(values, needles);

    tracing::trace!(
        operation = OPERATION,
        scanned = values.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

/// Windowed form of [`count_matches`].
///
/// Only `values[start_index..start_index + count]` is scanned; the whole
/// of `needles` is searched for each windowed element.
///
/// # Errors
/// - `NullArgument` if `values` or `needles` is absent
/// - `RangeError` for a window outside `values` (see [`Window::resolve`])
pub fn count_matches_windowed(
    values: Option<&[i32]>,
    needles: Option<&[i32]>,
    start_index: i64,
    count: i64,
) -> CountResult<usize> {
    const OPERATION: &str = "count_matches_windowed";

    let (window, needles) = validate(values, needles)
        .and_then(|(values, needles)| {
            let span = Window::new(start_index, count).resolve(values.len())?;
            Ok((&values[span], needles))
        })
        .map_err(|e| rejected(OPERATION, e))?;
    let matched = tally(window, needles);

    tracing::trace!(
        operation = OPERATION,
        scanned = window.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

fn validate<'a>(
    values: Option<&'a [i32]>,
    needles: Option<&'a [i32]>,
) -> CountResult<(&'a [i32], &'a [i32])> {
    let values = require(values, Argument::Values)?;
    let needles = require(needles, Argument::Needles)?;
    Ok((values, needles))
}
