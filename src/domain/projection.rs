//! Compound-value projection for retirement planning.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Projects a balance forward at a constant annual rate.
///
/// `balance × (1 + rate)^years`. An absent balance projects to zero.
/// Negative rates model decline scenarios and are not rejected.
pub fn project_future_value(current_balance: Option<Decimal>, rate: f64, years: u32) -> f64 {
    let Some(balance) = current_balance else {
        return 0.0;
    };
    balance.to_f64().unwrap_or(0.0) * (1.0 + rate).powi(years as i32)
}

/// Projection DTO as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub user_id: u64,
    pub current_age: u32,
    pub target_age: u32,
    /// Projection horizon in years: `target_age - current_age`.
    pub years: u32,
    /// Annual growth rate applied, typically the holding's risk-adjusted return.
    pub assumed_rate: f64,
    pub projected_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn absent_balance_projects_to_zero() {
        assert_eq!(project_future_value(None, 0.07, 20), 0.0);
    }

    #[test]
    fn zero_balance_projects_to_zero() {
        assert_eq!(project_future_value(Some(dec!(0)), 0.07, 20), 0.0);
        assert_eq!(project_future_value(Some(dec!(0)), -0.5, 3), 0.0);
    }

    #[test]
    fn zero_rate_preserves_balance() {
        assert_relative_eq!(
            project_future_value(Some(dec!(50000)), 0.0, 30),
            50000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_years_preserves_balance() {
        assert_relative_eq!(
            project_future_value(Some(dec!(12345.67)), 0.07, 0),
            12345.67,
            max_relative = 1e-12
        );
    }

    #[test]
    fn twenty_years_at_seven_percent() {
        let projected = project_future_value(Some(dec!(100000)), 0.07, 20);
        assert_relative_eq!(projected, 386_968.45, max_relative = 1e-6);
    }

    #[test]
    fn negative_rate_decays_the_balance() {
        let projected = project_future_value(Some(dec!(1000)), -0.10, 2);
        assert_relative_eq!(projected, 1000.0 * 0.9 * 0.9, max_relative = 1e-12);
        assert!(projected < 1000.0);
    }
}
