pub mod insights;
pub mod prompt;
pub mod providers;

pub use insights::{InsightsError, InsightsService};
pub use prompt::Prompt;
