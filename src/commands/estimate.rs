//! Estimate and batch-estimate command implementations.

use crate::config::Config;
use crate::estimate::PriceEstimator;
use crate::format::Formatter;
use crate::query::ItemDescriptor;
use crate::search::{DataForSeoClient, ShoppingSearch};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Estimates market and replacement values for inventory items.
pub struct EstimateCommand {
    config: Config,
}

impl EstimateCommand {
    /// Creates a new estimate command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Estimates one item and returns formatted output.
    pub async fn execute(&self, item: &ItemDescriptor) -> Result<String> {
        let client = self.build_client()?;
        self.execute_with_client(client, item).await
    }

    /// Estimates one item with a provided client (for testing).
    pub async fn execute_with_client<S: ShoppingSearch>(
        &self,
        client: Arc<S>,
        item: &ItemDescriptor,
    ) -> Result<String> {
        let estimator = self.estimator(client);
        let estimate = estimator.estimate(item).await;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_estimate(item, &estimate))
    }

    /// Estimates every item listed in a JSON file.
    pub async fn execute_batch(&self, path: &Path) -> Result<String> {
        let items = load_items(path)?;
        let client = self.build_client()?;
        self.execute_batch_with_client(client, &items).await
    }

    /// Estimates a batch with a provided client (for testing).
    pub async fn execute_batch_with_client<S: ShoppingSearch>(
        &self,
        client: Arc<S>,
        items: &[ItemDescriptor],
    ) -> Result<String> {
        info!("Estimating {} items", items.len());

        let estimator = self.estimator(client);
        let estimates = estimator.estimate_many(items).await;

        let rows: Vec<(ItemDescriptor, _)> = items.iter().cloned().zip(estimates).collect();
        let priced = rows.iter().filter(|(_, estimate)| estimate.has_data()).count();
        info!("{} of {} items priced", priced, rows.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_estimates(&rows))
    }

    fn build_client(&self) -> Result<Arc<DataForSeoClient>> {
        let client = DataForSeoClient::new(&self.config).context("Failed to create HTTP client")?;
        Ok(Arc::new(client))
    }

    fn estimator<S: ShoppingSearch>(&self, client: Arc<S>) -> PriceEstimator<S> {
        if !client.is_available() {
            warn!("No provider credentials configured; estimates will be zero");
        }
        PriceEstimator::new(client)
    }
}

/// Reads a JSON array of item descriptors.
pub fn load_items(path: &Path) -> Result<Vec<ItemDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read item file: {}", path.display()))?;

    let items: Vec<ItemDescriptor> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse item file: {}", path.display()))?;

    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
