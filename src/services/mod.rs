//! Orchestration over the ports: fetch inputs, run the engines, shape DTOs.

pub mod recommendation;
pub mod projection;

pub use projection::ProjectionService;
pub use recommendation::RecommendationService;
