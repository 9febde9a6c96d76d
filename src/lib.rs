// ============================================================================
// Element Counter Library
// Bounds-checked range and membership counting over numeric arrays
// ============================================================================

//! # Element Counter
//!
//! Stateless counting utilities over caller-supplied numeric arrays.
//!
//! ## Features
//!
//! - **Distinct decimal range counting** over `[low, high]` range specs
//! - **Float range counting** over parallel start/end arrays
//! - **Integer membership tallies** against a needle array
//! - **Windowed variants** of every operation with full bounds checking
//! - **Typed errors** naming the offending argument and the violated bound
//!
//! ## Example
//!
//! ```rust
//! use element_counter::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let prices: Vec<Decimal> = (1..=5).map(Decimal::from).collect();
//! let ranges = [Some(vec![Decimal::from(2), Decimal::from(4)])];
//! assert_eq!(count_distinct_in_ranges(Some(prices.as_slice()), Some(&ranges[..])), Ok(3));
//!
//! let readings = [1.0_f32, 2.0, 2.0];
//! assert_eq!(count_in_ranges(Some(&readings[..]), Some(&[1.0][..]), Some(&[2.5][..])), Ok(3));
//!
//! let ids = [1, 2, 3];
//! assert_eq!(count_matches_windowed(Some(&ids[..]), Some(&[1][..]), 0, 2), Ok(1));
//!
//! let err = count_matches_windowed(Some(&ids[..]), Some(&[1][..]), 4, 0).unwrap_err();
//! assert!(err.is_range_error());
//! ```

pub mod counting;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::counting::{
        count_distinct_in_ranges, count_distinct_in_ranges_windowed, count_in_ranges,
        count_in_ranges_windowed, count_matches, count_matches_windowed, Argument,
        ArgumentDefect, CountError, CountResult, Window, WindowViolation,
    };
}
