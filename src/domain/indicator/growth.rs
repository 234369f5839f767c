//! Growth metrics: CAGR and the volatility-adjusted return.

use crate::domain::indicator::TRADING_DAYS_PER_YEAR;
use crate::domain::price::PriceHistory;
use rust_decimal::prelude::ToPrimitive;

/// Compound annual growth rate over the full history.
///
/// Years are measured in trading days (`len / 252`), not calendar time.
/// Zero when the start price is non-positive or the history is empty.
pub fn cagr(history: &PriceHistory) -> f64 {
    let points = history.points();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    let start = first.adj_close.to_f64().unwrap_or(0.0);
    let end = last.adj_close.to_f64().unwrap_or(0.0);
    let years = points.len() as f64 / TRADING_DAYS_PER_YEAR as f64;

    if start <= 0.0 || years <= 0.0 {
        return 0.0;
    }

    (end / start).powf(1.0 / years) - 1.0
}

/// CAGR less half the return variance. A variance-drag approximation of the
/// growth a volatile asset actually compounds at; not a Sharpe ratio, no
/// risk-free rate is subtracted.
pub fn risk_adjusted_return(cagr: f64, volatility: f64) -> f64 {
    cagr - 0.5 * volatility * volatility
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::PricePoint;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_history(prices: &[Decimal]) -> PriceHistory {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &adj_close)| PricePoint {
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                adj_close,
            })
            .collect();
        PriceHistory::new(points).unwrap()
    }

    #[test]
    fn cagr_empty_history_is_zero() {
        assert_eq!(cagr(&PriceHistory::empty()), 0.0);
    }

    #[test]
    fn cagr_zero_start_price_is_zero() {
        let history = make_history(&[dec!(0), dec!(100)]);
        assert_eq!(cagr(&history), 0.0);
    }

    #[test]
    fn cagr_flat_series_is_zero() {
        let history = make_history(&[dec!(100); 300]);
        assert!(cagr(&history).abs() < 1e-12);
    }

    #[test]
    fn cagr_uses_trading_day_year_convention() {
        // Five points compounding +10% per step: end/start = 1.1^4, over
        // 5/252 years. Annualized via the 252-day convention.
        let history =
            make_history(&[dec!(100), dec!(110), dec!(121), dec!(133.1), dec!(146.41)]);
        let expected = 1.4641_f64.powf(252.0 / 5.0) - 1.0;
        assert_relative_eq!(cagr(&history), expected, max_relative = 1e-9);
    }

    #[test]
    fn cagr_full_trading_year_matches_total_return() {
        // 252 points spanning a doubling: years == 1, CAGR == 100%.
        let mut prices = vec![dec!(100)];
        for i in 1..252 {
            prices.push(dec!(100) + Decimal::from(i) * dec!(100) / Decimal::from(251));
        }
        let history = make_history(&prices);
        assert_relative_eq!(cagr(&history), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn cagr_declining_series_is_negative() {
        let history = make_history(&[dec!(100), dec!(90), dec!(80)]);
        assert!(cagr(&history) < 0.0);
    }

    #[test]
    fn risk_adjustment_subtracts_half_variance() {
        assert_relative_eq!(
            risk_adjusted_return(0.10, 0.20),
            0.10 - 0.5 * 0.04,
            max_relative = 1e-12
        );
        assert_eq!(risk_adjusted_return(0.0, 0.0), 0.0);
        // High volatility can push the adjusted return negative.
        assert!(risk_adjusted_return(0.05, 0.40) < 0.0);
    }
}
