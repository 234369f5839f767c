//! Annualized volatility of daily returns.
//!
//! Sample standard deviation (n−1 divisor) of the daily simple returns,
//! scaled by sqrt(252). Histories with fewer than two returns carry no
//! dispersion information and report zero.

use crate::domain::indicator::{daily_returns, TRADING_DAYS_PER_YEAR};
use crate::domain::price::PriceHistory;

pub fn annualized_volatility(history: &PriceHistory) -> f64 {
    let returns = daily_returns(history);
    if returns.len() < 2 {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    variance.sqrt() * (TRADING_DAYS_PER_YEAR as f64).sqrt()
}
