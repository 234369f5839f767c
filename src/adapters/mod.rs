//! Concrete adapter implementations for ports.

pub mod csv_market_data;
pub mod csv_account;
pub mod file_config_adapter;
