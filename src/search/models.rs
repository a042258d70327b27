//! Data models for shopping listings and the provider's SERP payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One priced product returned by the shopping search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Product title
    pub title: String,
    /// Price, always > 0
    pub price: f64,
    /// Currency code as returned by the provider (CAD, USD, ...)
    pub currency: String,
    /// Seller or source name, may be empty
    pub seller: String,
    /// Product URL, may be empty
    pub url: String,
}

impl Listing {
    /// Creates a listing with empty seller and URL.
    pub fn new(title: impl Into<String>, price: f64, currency: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            currency: currency.into(),
            seller: String::new(),
            url: String::new(),
        }
    }

    /// Sets the seller.
    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = seller.into();
        self
    }

    /// Sets the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Request task sent to the live SERP endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchTask<'a> {
    pub keyword: &'a str,
    pub location_code: u32,
    pub language_code: &'a str,
    pub device: &'a str,
    pub os: &'a str,
}

/// Top-level provider response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpResponse {
    #[serde(default)]
    pub tasks: Vec<SerpTask>,
}

/// One task in the provider response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpTask {
    #[serde(default)]
    pub status_code: u32,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<SerpResultSet>>,
}

/// One result set; items are kept untyped and classified one by one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpResultSet {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
}

/// SERP item classified by its `type` discriminant.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SerpItem {
    /// "Popular products" carousel; products are decoded one at a time
    PopularProducts {
        #[serde(default)]
        items: Option<Vec<Value>>,
    },
    /// Shopping carousel
    Shopping {
        #[serde(default)]
        items: Option<Vec<Value>>,
    },
    /// Ad block; only shoppable when `shopping_url` is set
    Paid(PaidEntry),
    /// Organic results, People-Also-Ask and everything else
    #[serde(other)]
    Other,
}

/// Product inside a carousel container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<PriceEntry>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Shopping ad.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaidEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<PriceEntry>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub shopping_url: Option<String>,
}

/// Price object as sent by the provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceEntry {
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PriceEntry {
    /// Returns the price if it is present and strictly positive.
    pub fn positive(&self) -> Option<f64> {
        self.current.filter(|p| p.is_finite() && *p > 0.0)
    }
}
