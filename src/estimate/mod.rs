//! Market-value estimation from shopping listings.

pub mod estimator;
pub mod models;
pub mod stats;

pub use estimator::{reduce, PriceEstimator, REPLACEMENT_MULTIPLIER};
pub use models::{EstimateResult, PriceRange, PricingMetadata, PricingSource};
pub use stats::{compute_median, filter_outliers, round2, select_prices};
