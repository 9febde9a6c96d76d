// ============================================================================
// Counting Module
// Bounds-checked range and membership counters over numeric arrays
// ============================================================================
//
// This module provides:
// - decimal_counter: distinct Decimal values inside [low, high] range specs
// - float_counter: f32 values inside ranges from parallel start/end arrays
// - integer_counter: cross-product tally of i32 values against needles
// - Window: start index/count resolution shared by the windowed operations
// - CountError: validation errors for every operation
//
// Each counter is independent and keeps its own matching rule (distinct vs
// repeated values, first matching range vs every matching range).
// All operations are pure and take "absent" inputs as `None`.

pub mod decimal_counter;
mod errors;
pub mod float_counter;
pub mod integer_counter;
mod window;

pub use decimal_counter::{count_distinct_in_ranges, count_distinct_in_ranges_windowed};
pub use errors::{Argument, ArgumentDefect, CountError, CountResult, WindowViolation};
pub use float_counter::{count_in_ranges, count_in_ranges_windowed};
pub use integer_counter::{count_matches, count_matches_windowed};
pub use window::Window;
