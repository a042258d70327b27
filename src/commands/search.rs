//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::search::{normalize_query, DataForSeoClient, ShoppingSearch};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Runs a raw provider search and prints the listings.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str) -> Result<String> {
        let client = DataForSeoClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ShoppingSearch,
        query: &str,
    ) -> Result<String> {
        if !client.is_available() {
            warn!("No provider credentials configured; set DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD");
        }

        info!("Searching for: {}", normalize_query(query));
        let listings = client.search(query).await;
        info!("Found {} priced listings", listings.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_listings(&listings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::search::Listing;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Mock search client for testing.
    struct MockSearch {
        available: bool,
        listings: Vec<Listing>,
        calls: AtomicU32,
    }

    impl MockSearch {
        fn new(listings: Vec<Listing>) -> Self {
            Self { available: true, listings, calls: AtomicU32::new(0) }
        }
    }

    #[async_trait]
    impl ShoppingSearch for MockSearch {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn search(&self, _query: &str) -> Vec<Listing> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.available {
                self.listings.clone()
            } else {
                Vec::new()
            }
        }

        fn clear_cache(&self) {}
    }

    fn make_test_config() -> Config {
        Config { retry_delay_ms: 0, ..Config::default() }
    }

    #[tokio::test]
    async fn test_search_command_table() {
        let client = MockSearch::new(vec![
            Listing::new("Sofa One", 499.0, "CAD").with_seller("Wayfair"),
            Listing::new("Sofa Two", 799.5, "CAD").with_seller("Structube"),
        ]);
        let cmd = SearchCommand::new(make_test_config());

        let output = cmd.execute_with_client(&client, "buy sofa").await.unwrap();
        assert!(output.contains("Sofa One"));
        assert!(output.contains("Structube"));
        assert!(output.contains("799.50"));
        assert!(output.contains("Total: 2 listings"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_command_json() {
        let client = MockSearch::new(vec![Listing::new("Lamp", 35.0, "CAD")]);
        let mut config = make_test_config();
        config.format = OutputFormat::Json;

        let output = SearchCommand::new(config).execute_with_client(&client, "buy lamp").await.unwrap();
        let parsed: Vec<Listing> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![Listing::new("Lamp", 35.0, "CAD")]);
    }

    #[tokio::test]
    async fn test_search_command_unconfigured() {
        let client = MockSearch { available: false, ..MockSearch::new(Vec::new()) };
        let output =
            SearchCommand::new(make_test_config()).execute_with_client(&client, "buy lamp").await.unwrap();
        assert_eq!(output, "No listings found.");
    }
}
