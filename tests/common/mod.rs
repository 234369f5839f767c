#![allow(dead_code)]

use chrono::NaiveDate;
use folioadvisor::domain::account::Account;
use folioadvisor::domain::error::AdvisorError;
use folioadvisor::domain::price::PricePoint;
use folioadvisor::ports::account_port::AccountPort;
use folioadvisor::ports::market_data_port::MarketDataPort;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

pub struct MockMarketDataPort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_prices(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(symbol.to_string(), points);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn historical_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, AdvisorError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(AdvisorError::MarketData {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(points) => Ok(points.clone()),
            None => Err(AdvisorError::NoData {
                symbol: symbol.to_string(),
            }),
        }
    }

    fn list_symbols(&self) -> Result<Vec<String>, AdvisorError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub struct MockAccountPort {
    pub accounts: HashMap<u64, Account>,
}

impl MockAccountPort {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.user_id, account);
        self
    }
}

impl AccountPort for MockAccountPort {
    fn get_account(&self, user_id: u64) -> Result<Account, AdvisorError> {
        self.accounts
            .get(&user_id)
            .cloned()
            .ok_or(AdvisorError::UnknownUser { user_id })
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_point(day_offset: i64, adj_close: Decimal) -> PricePoint {
    PricePoint {
        date: date(2020, 1, 1) + chrono::Duration::days(day_offset),
        adj_close,
    }
}

/// A history of `n` identical prices, one day apart.
pub fn flat_prices(n: usize, price: Decimal) -> Vec<PricePoint> {
    (0..n).map(|i| make_point(i as i64, price)).collect()
}

/// A history compounding at `step` per day from `start`.
pub fn trending_prices(n: usize, start: f64, step: f64) -> Vec<PricePoint> {
    (0..n)
        .map(|i| {
            let value = start * (1.0 + step).powi(i as i32);
            make_point(
                i as i64,
                Decimal::from_f64_retain(value).unwrap_or(dec!(0)),
            )
        })
        .collect()
}

pub fn sample_account(user_id: u64, holding: &str) -> Account {
    Account {
        user_id,
        balance: dec!(100000),
        current_age: 45,
        holding: holding.to_string(),
    }
}
