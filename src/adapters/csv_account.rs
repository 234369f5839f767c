//! CSV file account adapter.
//!
//! A single accounts file with a `user_id,balance,current_age,holding`
//! header, one row per user. Stands in for the portfolio collaborator.

use crate::domain::account::Account;
use crate::domain::error::AdvisorError;
use crate::ports::account_port::AccountPort;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub struct CsvAccountAdapter {
    path: PathBuf,
}

impl CsvAccountAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn parse_row(record: &csv::StringRecord) -> Result<Account, AdvisorError> {
        let field = |i: usize, name: &str| {
            record
                .get(i)
                .ok_or_else(|| AdvisorError::Account {
                    reason: format!("missing {} column", name),
                })
                .map(str::trim)
        };

        let user_id = field(0, "user_id")?
            .parse::<u64>()
            .map_err(|e| AdvisorError::Account {
                reason: format!("invalid user_id: {}", e),
            })?;
        let balance =
            Decimal::from_str(field(1, "balance")?).map_err(|e| AdvisorError::Account {
                reason: format!("invalid balance: {}", e),
            })?;
        let current_age = field(2, "current_age")?
            .parse::<u32>()
            .map_err(|e| AdvisorError::Account {
                reason: format!("invalid current_age: {}", e),
            })?;
        let holding = field(3, "holding")?.to_string();

        Ok(Account {
            user_id,
            balance,
            current_age,
            holding,
        })
    }
}

impl AccountPort for CsvAccountAdapter {
    fn get_account(&self, user_id: u64) -> Result<Account, AdvisorError> {
        let content = fs::read_to_string(&self.path).map_err(|e| AdvisorError::Account {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        for result in rdr.records() {
            let record = result.map_err(|e| AdvisorError::Account {
                reason: format!("CSV parse error: {}", e),
            })?;
            let account = Self::parse_row(&record)?;
            if account.user_id == user_id {
                return Ok(account);
            }
        }

        Err(AdvisorError::UnknownUser { user_id })
    }
}
