//! Extraction of listings from the provider's SERP response.

use super::error::SearchError;
use super::models::{Listing, PaidEntry, ProductEntry, SerpItem, SerpResponse};
use serde_json::Value;
use tracing::debug;

/// Status code the provider uses for a successful task.
pub const TASK_OK: u32 = 20000;

/// Parses a raw response body into listings.
///
/// Fails only when the body is not a provider envelope or the task did not
/// succeed. Individual items that don't decode are skipped.
pub fn parse_response(body: &str) -> Result<Vec<Listing>, SearchError> {
    let response: SerpResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    let task = response
        .tasks
        .into_iter()
        .next()
        .ok_or_else(|| SearchError::Decode("response contains no tasks".to_string()))?;

    if task.status_code != TASK_OK {
        return Err(SearchError::Provider {
            code: task.status_code,
            message: task.status_message.unwrap_or_default(),
        });
    }

    let listings: Vec<Listing> = task
        .result
        .unwrap_or_default()
        .into_iter()
        .flat_map(|set| set.items.unwrap_or_default())
        .flat_map(classify)
        .collect();

    debug!("Parsed {} listings", listings.len());
    Ok(listings)
}

/// Turns one raw SERP item into zero or more listings.
fn classify(raw: Value) -> Vec<Listing> {
    let item = match serde_json::from_value::<SerpItem>(raw) {
        Ok(item) => item,
        Err(e) => {
            debug!("Skipping undecodable SERP item: {}", e);
            return Vec::new();
        }
    };

    match item {
        SerpItem::PopularProducts { items } => products(items, false),
        SerpItem::Shopping { items } => products(items, true),
        SerpItem::Paid(paid) => from_paid(paid).into_iter().collect(),
        SerpItem::Other => Vec::new(),
    }
}

/// Decodes carousel products one by one; a malformed product only drops itself.
fn products(items: Option<Vec<Value>>, seller_from_source: bool) -> Vec<Listing> {
    items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<ProductEntry>(raw) {
            Ok(entry) => from_product(entry, seller_from_source),
            Err(e) => {
                debug!("Skipping undecodable carousel product: {}", e);
                None
            }
        })
        .collect()
}

/// Carousel product → listing. Shopping carousels name the seller `source`.
fn from_product(entry: ProductEntry, seller_from_source: bool) -> Option<Listing> {
    let price_entry = entry.price?;
    let price = price_entry.positive()?;

    let seller = if seller_from_source { entry.source } else { entry.seller };

    Some(Listing {
        title: entry.title.unwrap_or_default(),
        price,
        currency: price_entry.currency.unwrap_or_default(),
        seller: seller.unwrap_or_default(),
        url: entry.url.unwrap_or_default(),
    })
}

/// Shopping ad → listing. Text ads (no `shopping_url`) are not shoppable.
fn from_paid(entry: PaidEntry) -> Option<Listing> {
    let url = entry.shopping_url.filter(|u| !u.trim().is_empty())?;
    let price_entry = entry.price?;
    let price = price_entry.positive()?;

    Some(Listing {
        title: entry.title.unwrap_or_default(),
        price,
        currency: price_entry.currency.unwrap_or_default(),
        seller: entry.domain.unwrap_or_default(),
        url,
    })
}
