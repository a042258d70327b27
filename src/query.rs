//! Search-query construction from item descriptors.

use crate::translate::translate;
use serde::{Deserialize, Serialize};

/// Prefix that steers the provider toward shopping results instead of articles.
pub const QUERY_PREFIX: &str = "buy";

/// An inventory item as detected or entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    /// Item name, usually in French
    pub item_name: String,
    /// Brand name
    #[serde(default)]
    pub brand: Option<String>,
    /// Model name or number
    #[serde(default)]
    pub model: Option<String>,
    /// Category label, usually in French
    #[serde(default)]
    pub category: Option<String>,
}

impl ItemDescriptor {
    /// Creates a descriptor with only an item name.
    pub fn new(item_name: impl Into<String>) -> Self {
        Self { item_name: item_name.into(), ..Default::default() }
    }

    /// Sets the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Builds the provider search string for an item.
///
/// Layout is `buy <name> [<brand>] [<model>] [<category>]`. Name and category
/// go through [`translate`]; brand and model are proper nouns and are kept
/// verbatim. An empty item name yields an empty query.
pub fn build_query(item: &ItemDescriptor) -> String {
    if item.item_name.trim().is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = vec![QUERY_PREFIX.to_string(), translate(&item.item_name)];

    if let Some(brand) = &item.brand {
        parts.push(brand.clone());
    }
    if let Some(model) = &item.model {
        parts.push(model.clone());
    }
    if let Some(category) = &item.category {
        parts.push(translate(category));
    }

    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
