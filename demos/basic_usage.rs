// ============================================================================
// Basic Usage Example
// ============================================================================

use element_counter::prelude::*;
use rust_decimal::Decimal;

fn main() {
    println!("=== Element Counter Example ===\n");

    // Distinct decimal values inside any range; [] entries match nothing
    let prices: Vec<Decimal> = [101, 105, 105, 110, 120, 99]
        .iter()
        .map(|&p| Decimal::new(p, 0))
        .collect();
    let ranges = [
        Some(vec![Decimal::new(100, 0), Decimal::new(106, 0)]),
        Some(vec![]),
        Some(vec![Decimal::new(118, 0), Decimal::new(125, 0)]),
    ];
    match count_distinct_in_ranges(Some(prices.as_slice()), Some(&ranges[..])) {
        Ok(n) => println!("Distinct prices in ranges: {}", n),
        Err(e) => println!("Rejected: {}", e),
    }

    // Float ranges from parallel arrays: first match vs every match
    let readings = [0.5_f32, 1.2, 1.2, 3.8, 7.0];
    let starts = [0.0_f32, 1.0];
    let ends = [2.0_f32, 4.0];
    let any = count_in_ranges(Some(&readings[..]), Some(&starts[..]), Some(&ends[..]));
    let every = count_in_ranges_windowed(
        Some(&readings[..]),
        Some(&starts[..]),
        Some(&ends[..]),
        0,
        readings.len() as i64,
    );
    println!("Readings in any range: {:?}", any);
    println!("Range hits over all readings: {:?}", every);

    // Integer membership tally over a window
    let ids = [4, 8, 15, 16, 23, 42, 8];
    let wanted = [8, 42];
    println!(
        "Matches in ids[1..6]: {:?}",
        count_matches_windowed(Some(&ids[..]), Some(&wanted[..]), 1, 5)
    );

    // Invalid calls return typed errors
    if let Err(e) = count_matches_windowed(Some(&ids[..]), Some(&wanted[..]), 5, 4) {
        println!("\nRejected window: {}", e);
    }
    if let Err(e) = count_in_ranges(Some(&readings[..]), Some(&[3.0][..]), Some(&[1.0][..])) {
        println!("Rejected ranges: {}", e);
    }

    println!("\n=== Example Complete ===");
}
