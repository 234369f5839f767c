//! Recommendation pipeline: history -> bundle -> scored verdict.

use crate::domain::analysis::IndicatorBundle;
use crate::domain::error::AdvisorError;
use crate::domain::price::PriceHistory;
use crate::domain::scoring::{score, RecommendationResult};
use crate::ports::market_data_port::MarketDataPort;

pub struct RecommendationService<M: MarketDataPort> {
    market_data: M,
}

impl<M: MarketDataPort> RecommendationService<M> {
    pub fn new(market_data: M) -> Self {
        Self { market_data }
    }

    /// Fetches the symbol's history, validates it, and scores the analysis.
    ///
    /// An empty or missing history is a `NoData` error here: a verdict
    /// needs at least a latest price to compare against the trend.
    pub fn recommend(&self, symbol: &str) -> Result<RecommendationResult, AdvisorError> {
        let raw = self.market_data.historical_prices(symbol)?;
        let history = PriceHistory::new(raw)?;

        let Some(latest) = history.latest() else {
            return Err(AdvisorError::NoData {
                symbol: symbol.to_string(),
            });
        };
        let current_price = latest.adj_close;

        tracing::debug!(symbol, points = history.len(), "analyzing price history");
        let bundle = IndicatorBundle::analyze(&history);
        let recommendation = score(&bundle, current_price);

        tracing::info!(
            symbol,
            action = %recommendation.action,
            confidence = recommendation.confidence,
            "recommendation computed"
        );
        Ok(RecommendationResult::new(symbol, recommendation))
    }

    /// The full indicator bundle for a symbol, for callers that want the
    /// metrics rather than the verdict.
    pub fn analyze(&self, symbol: &str) -> Result<IndicatorBundle, AdvisorError> {
        let raw = self.market_data.historical_prices(symbol)?;
        let history = PriceHistory::new(raw)?;
        Ok(IndicatorBundle::analyze(&history))
    }
}
