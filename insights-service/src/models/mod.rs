pub mod insights;

pub use insights::{InsightRequest, REGION_REQUIRED};
