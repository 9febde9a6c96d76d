// ============================================================================
// Decimal Range Counter
// Counts distinct decimal values falling inside any of a set of closed ranges
// ============================================================================

use super::errors::{rejected, require, Argument, ArgumentDefect, CountError, CountResult};
use super::window::Window;
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// A validated, non-empty `[low, high]` range.
///
/// `low > high` is accepted and simply contains nothing.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    low: Decimal,
    high: Decimal,
}

impl Bounds {
    #[inline]
    fn contains(&self, value: Decimal) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Validate every range entry and keep the non-empty ones.
///
/// # Errors
/// - `NullArgument` for an absent entry
/// - `InvalidArgument` for an entry with a length other than 0 or 2
fn collect_bounds<R>(ranges: &[Option<R>]) -> CountResult<SmallVec<[Bounds; 8]>>
where
    R: AsRef<[Decimal]>,
{
    let mut bounds = SmallVec::new();

    for (index, entry) in ranges.iter().enumerate() {
        let entry: &[Decimal] = match entry {
            Some(entry) => entry.as_ref(),
            None => {
                return Err(CountError::NullArgument {
                    argument: Argument::RangeEntry(index),
                })
            },
        };

        match entry {
            [] => {},
            [low, high] => bounds.push(Bounds {
                low: *low,
                high: *high,
            }),
            other => {
                return Err(CountError::InvalidArgument {
                    argument: Argument::RangeEntry(index),
                    defect: ArgumentDefect::MalformedRange { len: other.len() },
                })
            },
        }
    }

    Ok(bounds)
}

/// Tally the distinct values of `values` that lie in at least one range.
///
/// Previously accepted matches are kept in insertion order and searched
/// linearly, so equality is exactly `Decimal`'s numeric equality.
fn count_distinct(values: &[Decimal], bounds: &[Bounds]) -> usize {
    let mut accepted: SmallVec<[Decimal; 16]> = SmallVec::new();

    for &value in values {
        if bounds.iter().any(|b| b.contains(value)) && !accepted.contains(&value) {
            accepted.push(value);
        }
    }

    accepted.len()
}

/// Count the distinct elements of `values` that fall within at least one
/// of `ranges`.
///
/// Each range entry is either empty (matches nothing) or a `[low, high]`
/// pair compared inclusively. A value matching several ranges, or repeated
/// in `values`, is counted once.
///
/// # Errors
/// - `NullArgument` if `values`, `ranges` or any range entry is absent
/// - `InvalidArgument` if a range entry has a length other than 0 or 2
///
/// # Example
/// ```
/// use element_counter::counting::decimal_counter::count_distinct_in_ranges;
/// use rust_decimal::Decimal;
///
/// let values: Vec<Decimal> = (1..=5).map(Decimal::from).collect();
/// let ranges = [Some(vec![Decimal::from(2), Decimal::from(4)])];
///
/// assert_eq!(
///     count_distinct_in_ranges(Some(values.as_slice()), Some(&ranges[..])),
///     Ok(3)
/// );
/// ```
pub fn count_distinct_in_ranges<R>(
    values: Option<&[Decimal]>,
    ranges: Option<&[Option<R>]>,
) -> CountResult<usize>
where
    R: AsRef<[Decimal]>,
{
    const OPERATION: &str = "count_distinct_in_ranges";

    let (values, bounds) = validate(values, ranges).map_err(|e| rejected(OPERATION, e))?;

    let matched = if values.is_empty() || bounds.is_empty() {
        0
    } else {
        count_distinct(values, &bounds)
    };

    tracing::trace!(
        operation = OPERATION,
        scanned = values.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

/// Windowed form of [`count_distinct_in_ranges`].
///
/// Only `values[start_index..start_index + count]` is scanned and the
/// distinct-match set accumulates over that window alone.
///
/// # Errors
/// Everything [`count_distinct_in_ranges`] reports, then `RangeError` for a
/// window outside `values` (see [`Window::resolve`]).
pub fn count_distinct_in_ranges_windowed<R>(
    values: Option<&[Decimal]>,
    ranges: Option<&[Option<R>]>,
    start_index: i64,
    count: i64,
) -> CountResult<usize>
where
    R: AsRef<[Decimal]>,
{
    const OPERATION: &str = "count_distinct_in_ranges_windowed";

    let (window, bounds) = validate(values, ranges)
        .and_then(|(values, bounds)| {
            let span = Window::new(start_index, count).resolve(values.len())?;
            Ok((&values[span], bounds))
        })
        .map_err(|e| rejected(OPERATION, e))?;

    let matched = count_distinct(window, &bounds);

    tracing::trace!(
        operation = OPERATION,
        scanned = window.len(),
        matched,
        "count complete"
    );
    Ok(matched)
}

fn validate<'a, R>(
    values: Option<&'a [Decimal]>,
    ranges: Option<&[Option<R>]>,
) -> CountResult<(&'a [Decimal], SmallVec<[Bounds; 8]>)>
where
    R: AsRef<[Decimal]>,
{
    let values = require(values, Argument::Values)?;
    let ranges = require(ranges, Argument::Ranges)?;
    let bounds = collect_bounds(ranges)?;
    Ok((values, bounds))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn decimal_vec(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
        proptest::collection::vec((-50_i64..50).prop_map(Decimal::from), 0..=max_len)
    }

    fn range_vec() -> impl Strategy<Value = Vec<Option<Vec<Decimal>>>> {
        let entry = prop_oneof![
            1 => Just(Vec::<Decimal>::new()),
            4 => (-60_i64..60, -60_i64..60)
                .prop_map(|(a, b)| vec![Decimal::from(a), Decimal::from(b)]),
        ];
        proptest::collection::vec(entry.prop_map(Some), 0..6)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn never_exceeds_distinct_values(values in decimal_vec(40), ranges in range_vec()) {
            let distinct: HashSet<Decimal> = values.iter().copied().collect();
            let counted =
                count_distinct_in_ranges(Some(values.as_slice()), Some(ranges.as_slice())).unwrap();
            prop_assert!(counted <= distinct.len());
        }

        #[test]
        fn full_window_matches_unrestricted(values in decimal_vec(40), ranges in range_vec()) {
            let full =
                count_distinct_in_ranges(Some(values.as_slice()), Some(ranges.as_slice())).unwrap();
            let window = Window::full(values.len());
            let windowed = count_distinct_in_ranges_windowed(
                Some(values.as_slice()),
                Some(ranges.as_slice()),
                window.start_index(),
                window.count(),
            )
            .unwrap();
            prop_assert_eq!(full, windowed);
        }

        #[test]
        fn repeated_calls_agree(values in decimal_vec(40), ranges in range_vec()) {
            let first = count_distinct_in_ranges(Some(values.as_slice()), Some(ranges.as_slice()));
            let second = count_distinct_in_ranges(Some(values.as_slice()), Some(ranges.as_slice()));
            prop_assert_eq!(first, second);
        }
    }
}
