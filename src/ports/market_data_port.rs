//! Market data access port trait.

use crate::domain::error::AdvisorError;
use crate::domain::price::PricePoint;

/// Source of historical daily prices for a symbol. How the data is fetched,
/// cached or rate-limited is the adapter's concern.
pub trait MarketDataPort {
    /// Full available daily history for `symbol`, oldest first.
    fn historical_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, AdvisorError>;

    fn list_symbols(&self) -> Result<Vec<String>, AdvisorError>;
}
