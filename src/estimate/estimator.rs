//! Item → market value estimation.

use super::models::{EstimateResult, PriceRange, PricingMetadata, PricingSource};
use super::stats::{compute_median, filter_outliers, round2, select_prices};
use crate::query::{build_query, ItemDescriptor};
use crate::search::{Listing, ShoppingSearch};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Insurance replacement-cost markup over market value.
pub const REPLACEMENT_MULTIPLIER: f64 = 1.3;

/// Estimates item values through a shared shopping-search client.
pub struct PriceEstimator<S: ShoppingSearch> {
    search: Arc<S>,
}

impl<S: ShoppingSearch> Clone for PriceEstimator<S> {
    fn clone(&self) -> Self {
        Self { search: Arc::clone(&self.search) }
    }
}

impl<S: ShoppingSearch> PriceEstimator<S> {
    /// Creates an estimator around a search client.
    pub fn new(search: Arc<S>) -> Self {
        Self { search }
    }

    /// Returns the underlying search client.
    pub fn search_client(&self) -> &S {
        &self.search
    }

    /// Estimates one item. Never fails; missing data yields a zero estimate.
    pub async fn estimate(&self, item: &ItemDescriptor) -> EstimateResult {
        if !self.search.is_available() {
            debug!("Pricing provider not configured");
            return EstimateResult::unavailable();
        }

        let query = build_query(item);
        let listings = if query.is_empty() { Vec::new() } else { self.search.search(&query).await };

        let result = reduce(&query, &listings);
        info!(
            "Estimated '{}' at {:.2} from {} listings",
            item.item_name,
            result.estimated_value,
            result.sample_count()
        );
        result
    }

    /// Estimates each item independently, in input order.
    pub async fn estimate_many(&self, items: &[ItemDescriptor]) -> Vec<EstimateResult> {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(self.estimate(item).await);
        }
        results
    }
}

/// Turns listings into an estimate for `query`.
pub fn reduce(query: &str, listings: &[Listing]) -> EstimateResult {
    let selected = select_prices(listings);
    let filtered = filter_outliers(&selected);

    debug!(
        "{} listings, {} after currency selection, {} after outlier filtering",
        listings.len(),
        selected.len(),
        filtered.len()
    );

    let median = round2(compute_median(&filtered));
    let source = if filtered.is_empty() { PricingSource::None } else { PricingSource::DataForSeo };

    EstimateResult {
        estimated_value: median,
        replacement_value: round2(median * REPLACEMENT_MULTIPLIER),
        pricing_metadata: Some(PricingMetadata {
            pricing_source: source,
            median_price: median,
            sample_count: filtered.len(),
            search_query: query.to_string(),
            price_range: PriceRange::of(&selected),
            estimated_at: Utc::now(),
        }),
    }
}
