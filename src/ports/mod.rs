//! Port traits for the external collaborators.

pub mod market_data_port;
pub mod account_port;
pub mod config_port;
