//! Maximum drawdown over the trailing year.
//!
//! Restricted to the last min(len, 252) points: track the running peak and
//! report the largest peak-to-price drop as a decimal fraction. Zero for
//! flat or monotonically rising series.

use crate::domain::indicator::TRADING_DAYS_PER_YEAR;
use crate::domain::price::PriceHistory;
use rust_decimal::prelude::ToPrimitive;

pub fn max_drawdown(history: &PriceHistory) -> f64 {
    let points = history.points();
    let lookback = points.len().min(TRADING_DAYS_PER_YEAR);
    let window = &points[points.len() - lookback..];

    let mut peak = 0.0_f64;
    let mut max_dd = 0.0_f64;

    for point in window {
        let price = point.adj_close.to_f64().unwrap_or(0.0);
        if price > peak {
            peak = price;
        } else if peak > 0.0 {
            let dd = (peak - price) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }

    max_dd
}
