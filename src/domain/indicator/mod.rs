//! Indicator primitives used by the analysis engine.
//!
//! Each calculation is a pure function over a validated [`PriceHistory`]
//! (see [`crate::domain::price`]); degenerate inputs degrade to documented
//! sentinel values rather than erroring.

pub mod sma;
pub mod returns;
pub mod volatility;
pub mod drawdown;
pub mod growth;

/// Trading-day year convention used for annualization and lookback windows.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

pub use drawdown::max_drawdown;
pub use growth::{cagr, risk_adjusted_return};
pub use returns::daily_returns;
pub use sma::sma;
pub use volatility::annualized_volatility;
