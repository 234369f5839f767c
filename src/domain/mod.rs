//! Core domain types and analysis engines.

pub mod price;
pub mod account;
pub mod indicator;
pub mod analysis;
pub mod scoring;
pub mod projection;
pub mod error;
