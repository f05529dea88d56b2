//! Quote pricing for new shipments.
//!
//! Stand-in for a real pricing engine: a quote is drawn from a fixed band
//! and rounded to the nearest thousand currency units.

use rand::Rng;

pub const MIN_QUOTE: i64 = 50_000;
pub const MAX_QUOTE: i64 = 200_000;

/// Quote a price in whole currency units.
pub fn quote_price() -> i64 {
    let raw = rand::thread_rng().gen_range(MIN_QUOTE..=MAX_QUOTE);
    (raw + 500) / 1_000 * 1_000
}
