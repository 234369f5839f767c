//! folioadvisor — portfolio analytics and retirement projection engine.
//!
//! Hexagonal architecture: analysis engines in [`domain`], collaborator
//! traits in [`ports`], file-backed implementations in [`adapters`],
//! orchestration in [`services`].

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod cli;
