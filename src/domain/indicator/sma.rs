//! Simple Moving Average over the trailing window.
//!
//! SMA(n) = mean of the last n adjusted closes, rounded to 4 significant
//! digits half-up. Returns `None` when the history is shorter than the
//! period, so "insufficient data" is distinguishable from a computed zero.

use crate::domain::price::PriceHistory;
use rust_decimal::{Decimal, RoundingStrategy};

const SIGNIFICANT_DIGITS: u32 = 4;

pub fn sma(history: &PriceHistory, period: usize) -> Option<Decimal> {
    if period == 0 || history.len() < period {
        return None;
    }

    let points = history.points();
    let window = &points[points.len() - period..];
    let sum: Decimal = window.iter().map(|p| p.adj_close).sum();
    let mean = sum / Decimal::from(period as u64);

    Some(
        mean.round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .unwrap_or(mean),
    )
}
