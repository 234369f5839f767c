//! Daily simple returns.

use crate::domain::price::PriceHistory;
use rust_decimal::prelude::ToPrimitive;

/// Day-over-day simple returns: `(p[i] - p[i-1]) / p[i-1]`.
///
/// A zero previous price yields a zero return, not an error. The result has
/// `len - 1` entries; empty for histories shorter than two points.
pub fn daily_returns(history: &PriceHistory) -> Vec<f64> {
    history
        .points()
        .windows(2)
        .map(|w| {
            let prev = w[0].adj_close.to_f64().unwrap_or(0.0);
            let curr = w[1].adj_close.to_f64().unwrap_or(0.0);
            if prev == 0.0 {
                0.0
            } else {
                (curr - prev) / prev
            }
        })
        .collect()
}
