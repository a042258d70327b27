//! Shopping search: provider client, response parsing, caching and retry.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod parser;
pub mod retry;

pub use cache::{normalize_query, CacheStats, QueryCache};
pub use client::{DataForSeoClient, ShoppingSearch};
pub use error::SearchError;
pub use models::Listing;
pub use parser::parse_response;
