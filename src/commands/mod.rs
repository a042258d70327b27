//! CLI command implementations.

pub mod estimate;
pub mod search;

pub use estimate::EstimateCommand;
pub use search::SearchCommand;
