//! HTTP handlers for the insights service.

pub mod app;
pub mod insights;

pub use app::{health_check, index, not_found};
pub use insights::generate_insights;
