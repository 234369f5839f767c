//! Projection pipeline: account -> holding analysis -> compounded value.

use crate::domain::analysis::IndicatorBundle;
use crate::domain::error::AdvisorError;
use crate::domain::price::PriceHistory;
use crate::domain::projection::{project_future_value, ProjectionResult};
use crate::ports::account_port::AccountPort;
use crate::ports::market_data_port::MarketDataPort;

pub struct ProjectionService<M: MarketDataPort, A: AccountPort> {
    market_data: M,
    accounts: A,
}

impl<M: MarketDataPort, A: AccountPort> ProjectionService<M, A> {
    pub fn new(market_data: M, accounts: A) -> Self {
        Self {
            market_data,
            accounts,
        }
    }

    /// Projects a user's balance to `target_age`, compounding at the
    /// risk-adjusted return of their primary holding.
    ///
    /// A target age before the current age is rejected; equal ages project
    /// zero years and return the balance unchanged.
    pub fn project(&self, user_id: u64, target_age: u32) -> Result<ProjectionResult, AdvisorError> {
        let account = self.accounts.get_account(user_id)?;

        if target_age < account.current_age {
            return Err(AdvisorError::InvalidHorizon {
                current_age: account.current_age,
                target_age,
            });
        }
        let years = target_age - account.current_age;

        let raw = self.market_data.historical_prices(&account.holding)?;
        let history = PriceHistory::new(raw)?;
        let bundle = IndicatorBundle::analyze(&history);
        let rate = bundle.risk_adjusted_return;

        tracing::info!(
            user_id,
            holding = %account.holding,
            years,
            rate,
            "projecting balance"
        );

        Ok(ProjectionResult {
            user_id,
            current_age: account.current_age,
            target_age,
            years,
            assumed_rate: rate,
            projected_balance: project_future_value(Some(account.balance), rate, years),
        })
    }
}
