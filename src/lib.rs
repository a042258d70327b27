//! inventory-pricing - Market-value estimation for home-inventory items
//!
//! Translates French item descriptions into English shopping queries, searches
//! a SERP provider for priced listings and reduces them to a robust CAD estimate.

pub mod commands;
pub mod config;
pub mod estimate;
pub mod format;
pub mod query;
pub mod search;
pub mod translate;

pub use config::Config;
pub use estimate::{EstimateResult, PriceEstimator, PricingMetadata, PricingSource};
pub use query::{build_query, ItemDescriptor};
pub use search::{DataForSeoClient, Listing, ShoppingSearch};
pub use translate::translate;
