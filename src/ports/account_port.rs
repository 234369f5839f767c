//! Account access port trait.

use crate::domain::account::Account;
use crate::domain::error::AdvisorError;

/// Source of user portfolio state for projections.
pub trait AccountPort {
    fn get_account(&self, user_id: u64) -> Result<Account, AdvisorError>;
}
