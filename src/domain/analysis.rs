//! Technical analysis bundle: the full indicator report for one series.

use crate::domain::indicator::{
    annualized_volatility, cagr, max_drawdown, risk_adjusted_return, sma,
};
use crate::domain::price::PriceHistory;
use rust_decimal::Decimal;
use serde::Serialize;

/// Every metric derived from a single price history.
///
/// SMAs are `None` when the history is shorter than their period. The float
/// metrics use a zero sentinel for degenerate input; callers that must
/// distinguish "computed zero" check the history length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBundle {
    /// Short-term trend: 20-period simple moving average.
    pub sma20: Option<Decimal>,
    /// Medium-term trend: 50-period simple moving average.
    pub sma50: Option<Decimal>,
    /// Long-term trend: 200-period simple moving average.
    pub sma200: Option<Decimal>,
    /// Largest peak-to-trough drop in the trailing year, as a fraction.
    pub max_drawdown: f64,
    /// Annualized standard deviation of daily returns.
    pub volatility: f64,
    /// Compound annual growth rate over the full history.
    pub cagr: f64,
    /// CAGR less half the return variance.
    pub risk_adjusted_return: f64,
}

impl IndicatorBundle {
    /// Analyzes a price history. Pure and deterministic: identical input
    /// produces a bit-identical bundle. An empty history yields the
    /// all-sentinel bundle rather than an error.
    pub fn analyze(history: &PriceHistory) -> Self {
        if history.is_empty() {
            return Self::unavailable();
        }

        let volatility = annualized_volatility(history);
        let growth = cagr(history);

        Self {
            sma20: sma(history, 20),
            sma50: sma(history, 50),
            sma200: sma(history, 200),
            max_drawdown: max_drawdown(history),
            volatility,
            cagr: growth,
            risk_adjusted_return: risk_adjusted_return(growth, volatility),
        }
    }

    /// The safe default for a missing or empty series.
    pub fn unavailable() -> Self {
        Self {
            sma20: None,
            sma50: None,
            sma200: None,
            max_drawdown: 0.0,
            volatility: 0.0,
            cagr: 0.0,
            risk_adjusted_return: 0.0,
        }
    }

    /// Golden cross: short-term trend above the medium-term trend.
    pub fn is_bullish_crossover(&self) -> bool {
        match (self.sma20, self.sma50) {
            (Some(short), Some(medium)) => short > medium,
            _ => false,
        }
    }

    /// Current price strictly above the long-term trend.
    pub fn is_bullish_trend(&self, current_price: Decimal) -> bool {
        self.sma200.is_some_and(|long| current_price > long)
    }
}
