//! Account snapshot supplied by the portfolio collaborator.

use rust_decimal::Decimal;

/// A user's portfolio state as seen by the projection pipeline: current
/// balance, current age, and the primary holding whose growth profile
/// drives the retirement projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user_id: u64,
    pub balance: Decimal,
    pub current_age: u32,
    pub holding: String,
}
