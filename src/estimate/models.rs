//! Estimate results and the metadata attached to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an estimate's numbers came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingSource {
    #[serde(rename = "dataforseo")]
    DataForSeo,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl std::fmt::Display for PricingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingSource::DataForSeo => write!(f, "dataforseo"),
            PricingSource::None => write!(f, "none"),
        }
    }
}

/// Observed price span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Min/max of `values`; zeroes for an empty slice.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }
}

/// How an estimate was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingMetadata {
    pub pricing_source: PricingSource,
    /// Median of the filtered sample, CAD
    pub median_price: f64,
    /// Listings used after currency selection and outlier filtering
    pub sample_count: usize,
    pub search_query: String,
    /// Range of the currency-selected prices before filtering
    pub price_range: PriceRange,
    pub estimated_at: DateTime<Utc>,
}

/// Market value and replacement value of one item, in CAD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub estimated_value: f64,
    pub replacement_value: f64,
    /// `None` only when the search provider is not configured
    pub pricing_metadata: Option<PricingMetadata>,
}

impl EstimateResult {
    /// Result returned when no provider is configured.
    pub fn unavailable() -> Self {
        Self { estimated_value: 0.0, replacement_value: 0.0, pricing_metadata: None }
    }

    /// Number of listings behind the estimate.
    pub fn sample_count(&self) -> usize {
        self.pricing_metadata.as_ref().map(|m| m.sample_count).unwrap_or(0)
    }

    /// True when at least one listing backed the estimate.
    pub fn has_data(&self) -> bool {
        self.sample_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_of() {
        assert_eq!(PriceRange::of(&[120.0, 80.0, 300.0]), PriceRange { min: 80.0, max: 300.0 });
        assert_eq!(PriceRange::of(&[]), PriceRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_unavailable() {
        let result = EstimateResult::unavailable();
        assert_eq!(result.estimated_value, 0.0);
        assert_eq!(result.replacement_value, 0.0);
        assert!(result.pricing_metadata.is_none());
        assert!(!result.has_data());
    }

    #[test]
    fn test_pricing_source_serde() {
        assert_eq!(serde_json::to_string(&PricingSource::DataForSeo).unwrap(), "\"dataforseo\"");
        assert_eq!(serde_json::to_string(&PricingSource::None).unwrap(), "\"none\"");
        assert_eq!(PricingSource::DataForSeo.to_string(), "dataforseo");
    }

    #[test]
    fn test_estimate_serializes_camel_case() {
        let result = EstimateResult {
            estimated_value: 150.0,
            replacement_value: 195.0,
            pricing_metadata: Some(PricingMetadata {
                pricing_source: PricingSource::DataForSeo,
                median_price: 150.0,
                sample_count: 3,
                search_query: "buy sofa".to_string(),
                price_range: PriceRange { min: 100.0, max: 200.0 },
                estimated_at: Utc::now(),
            }),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["estimatedValue"], 150.0);
        assert_eq!(json["replacementValue"], 195.0);
        assert_eq!(json["pricingMetadata"]["pricingSource"], "dataforseo");
        assert_eq!(json["pricingMetadata"]["sampleCount"], 3);
        assert_eq!(json["pricingMetadata"]["priceRange"]["max"], 200.0);
        assert!(json["pricingMetadata"]["estimatedAt"].is_string());
    }

    #[test]
    fn test_unavailable_serializes_null_metadata() {
        let json = serde_json::to_value(EstimateResult::unavailable()).unwrap();
        assert!(json["pricingMetadata"].is_null());
    }
}
