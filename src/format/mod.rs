//! Output formatting for estimates and listings (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::estimate::EstimateResult;
use crate::query::ItemDescriptor;
use crate::search::Listing;
use serde::Serialize;

/// One item with its estimate, as emitted in JSON output.
#[derive(Debug, Serialize)]
struct EstimateRow<'a> {
    item: &'a ItemDescriptor,
    estimate: &'a EstimateResult,
}

/// Formats pipeline results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single estimate.
    pub fn format_estimate(&self, item: &ItemDescriptor, estimate: &EstimateResult) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&EstimateRow { item, estimate })
                    .unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_single(item, estimate),
            OutputFormat::Markdown => self.markdown_single(item, estimate),
            OutputFormat::Csv => self.csv_estimates(&[(item.clone(), estimate.clone())]),
        }
    }

    /// Formats a batch of estimates.
    pub fn format_estimates(&self, rows: &[(ItemDescriptor, EstimateResult)]) -> String {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<EstimateRow<'_>> =
                    rows.iter().map(|(item, estimate)| EstimateRow { item, estimate }).collect();
                serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_estimates(rows),
            OutputFormat::Markdown => self.markdown_estimates(rows),
            OutputFormat::Csv => self.csv_estimates(rows),
        }
    }

    /// Formats raw search listings.
    pub fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => "title,price,currency,seller,url".to_string(),
                _ => "No listings found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(listings).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_listings(listings),
            OutputFormat::Markdown => self.markdown_listings(listings),
            OutputFormat::Csv => self.csv_listings(listings),
        }
    }

    // Table formatting

    fn table_single(&self, item: &ItemDescriptor, estimate: &EstimateResult) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Item:        {}", item.item_name));
        if let Some(brand) = &item.brand {
            lines.push(format!("Brand:       {}", brand));
        }
        if let Some(model) = &item.model {
            lines.push(format!("Model:       {}", model));
        }
        if let Some(category) = &item.category {
            lines.push(format!("Category:    {}", category));
        }

        match &estimate.pricing_metadata {
            None => lines.push("Pricing:     provider not configured".to_string()),
            Some(meta) => {
                lines.push(format!("Query:       {}", meta.search_query));
                lines.push(format!("Estimated:   CAD {:.2}", estimate.estimated_value));
                lines.push(format!("Replacement: CAD {:.2}", estimate.replacement_value));
                lines.push(format!(
                    "Samples:     {} (range {:.2} - {:.2})",
                    meta.sample_count, meta.price_range.min, meta.price_range.max
                ));
                lines.push(format!("Source:      {}", meta.pricing_source));
                lines.push(format!("Estimated at {}", meta.estimated_at.to_rfc3339()));
            }
        }

        lines.join("\n")
    }

    fn table_estimates(&self, rows: &[(ItemDescriptor, EstimateResult)]) -> String {
        let name_width = 32;
        let value_width = 12;
        let samples_width = 7;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<name_width$}  {:>value_width$}  {:>value_width$}  {:>samples_width$}",
            "Item", "Estimated", "Replacement", "Samples"
        ));
        lines.push(format!(
            "{:-<name_width$}  {:-<value_width$}  {:-<value_width$}  {:-<samples_width$}",
            "", "", "", ""
        ));

        let mut total_estimated = 0.0;
        let mut total_replacement = 0.0;

        for (item, estimate) in rows {
            let samples = match &estimate.pricing_metadata {
                Some(meta) => meta.sample_count.to_string(),
                None => "N/A".to_string(),
            };

            lines.push(format!(
                "{:<name_width$}  {:>value_width$.2}  {:>value_width$.2}  {:>samples_width$}",
                Self::truncate(&item.item_name, name_width),
                estimate.estimated_value,
                estimate.replacement_value,
                samples
            ));

            total_estimated += estimate.estimated_value;
            total_replacement += estimate.replacement_value;
        }

        lines.push(String::new());
        lines.push(format!(
            "Total: {} items, estimated CAD {:.2}, replacement CAD {:.2}",
            rows.len(),
            total_estimated,
            total_replacement
        ));

        lines.join("\n")
    }

    fn table_listings(&self, listings: &[Listing]) -> String {
        let price_width = 10;
        let currency_width = 8;
        let seller_width = 20;
        let title_width = 50;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:>price_width$}  {:<currency_width$}  {:<seller_width$}  {}",
            "Price", "Currency", "Seller", "Title"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<currency_width$}  {:-<seller_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        for listing in listings {
            lines.push(format!(
                "{:>price_width$.2}  {:<currency_width$}  {:<seller_width$}  {}",
                listing.price,
                listing.currency,
                Self::truncate(&listing.seller, seller_width),
                Self::truncate(&listing.title, title_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} listings", listings.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, item: &ItemDescriptor, estimate: &EstimateResult) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", item.item_name));
        lines.push(String::new());

        match &estimate.pricing_metadata {
            None => lines.push("- **Pricing:** provider not configured".to_string()),
            Some(meta) => {
                lines.push(format!("- **Estimated value:** CAD {:.2}", estimate.estimated_value));
                lines.push(format!("- **Replacement value:** CAD {:.2}", estimate.replacement_value));
                lines.push(format!("- **Samples:** {}", meta.sample_count));
                lines.push(format!(
                    "- **Observed range:** CAD {:.2} - {:.2}",
                    meta.price_range.min, meta.price_range.max
                ));
                lines.push(format!("- **Search query:** `{}`", meta.search_query));
            }
        }

        lines.join("\n")
    }

    fn markdown_estimates(&self, rows: &[(ItemDescriptor, EstimateResult)]) -> String {
        let mut lines = Vec::new();

        lines.push("| Item | Estimated | Replacement | Samples |".to_string());
        lines.push("|------|-----------|-------------|---------|".to_string());

        for (item, estimate) in rows {
            lines.push(format!(
                "| {} | {:.2} | {:.2} | {} |",
                item.item_name.replace('|', "\\|"),
                estimate.estimated_value,
                estimate.replacement_value,
                estimate.sample_count()
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} items estimated*", rows.len()));

        lines.join("\n")
    }

    fn markdown_listings(&self, listings: &[Listing]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Currency | Seller | Title |".to_string());
        lines.push("|-------|----------|--------|-------|".to_string());

        for listing in listings {
            let title = Self::truncate(&listing.title, 40).replace('|', "\\|");
            let title = if listing.url.is_empty() { title } else { format!("[{}]({})", title, listing.url) };

            lines.push(format!(
                "| {:.2} | {} | {} | {} |",
                listing.price, listing.currency, listing.seller, title
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} listings found*", listings.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_estimates(&self, rows: &[(ItemDescriptor, EstimateResult)]) -> String {
        let mut lines = Vec::new();
        lines.push(
            "item,brand,model,category,estimated_value,replacement_value,sample_count,source,search_query"
                .to_string(),
        );

        for (item, estimate) in rows {
            let (source, query) = match &estimate.pricing_metadata {
                Some(meta) => (meta.pricing_source.to_string(), Self::csv_escape(&meta.search_query)),
                None => (String::new(), String::new()),
            };

            lines.push(format!(
                "{},{},{},{},{:.2},{:.2},{},{},{}",
                Self::csv_escape(&item.item_name),
                item.brand.as_deref().map(Self::csv_escape).unwrap_or_default(),
                item.model.as_deref().map(Self::csv_escape).unwrap_or_default(),
                item.category.as_deref().map(Self::csv_escape).unwrap_or_default(),
                estimate.estimated_value,
                estimate.replacement_value,
                estimate.sample_count(),
                source,
                query
            ));
        }

        lines.join("\n")
    }

    fn csv_listings(&self, listings: &[Listing]) -> String {
        let mut lines = Vec::new();
        lines.push("title,price,currency,seller,url".to_string());

        for listing in listings {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(&listing.title),
                listing.price,
                Self::csv_escape(&listing.currency),
                Self::csv_escape(&listing.seller),
                Self::csv_escape(&listing.url)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    fn truncate(s: &str, width: usize) -> String {
        if s.chars().count() > width {
            let cut: String = s.chars().take(width.saturating_sub(3)).collect();
            format!("{}...", cut)
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{PriceRange, PricingMetadata, PricingSource};
    use chrono::Utc;

    fn make_item() -> ItemDescriptor {
        ItemDescriptor::new("Canapé en cuir").with_brand("IKEA").with_category("Meubles")
    }

    fn make_estimate() -> EstimateResult {
        EstimateResult {
            estimated_value: 150.0,
            replacement_value: 195.0,
            pricing_metadata: Some(PricingMetadata {
                pricing_source: PricingSource::DataForSeo,
                median_price: 150.0,
                sample_count: 3,
                search_query: "buy sofa leather IKEA furniture".to_string(),
                price_range: PriceRange { min: 100.0, max: 200.0 },
                estimated_at: Utc::now(),
            }),
        }
    }

    fn make_listing() -> Listing {
        Listing::new("KIVIK Sofa, leather", 899.0, "CAD").with_seller("IKEA").with_url("https://ikea.ca/kivik")
    }

    #[test]
    fn test_table_single() {
        let output = Formatter::new(OutputFormat::Table).format_estimate(&make_item(), &make_estimate());
        assert!(output.contains("Canapé en cuir"));
        assert!(output.contains("Brand:       IKEA"));
        assert!(output.contains("CAD 150.00"));
        assert!(output.contains("CAD 195.00"));
        assert!(output.contains("range 100.00 - 200.00"));
        assert!(output.contains("dataforseo"));
    }

    #[test]
    fn test_table_single_unavailable() {
        let output =
            Formatter::new(OutputFormat::Table).format_estimate(&make_item(), &EstimateResult::unavailable());
        assert!(output.contains("provider not configured"));
    }

    #[test]
    fn test_json_single() {
        let output = Formatter::new(OutputFormat::Json).format_estimate(&make_item(), &make_estimate());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["item"]["itemName"], "Canapé en cuir");
        assert_eq!(parsed["estimate"]["replacementValue"], 195.0);
    }

    #[test]
    fn test_table_estimates_totals() {
        let rows = vec![(make_item(), make_estimate()), (ItemDescriptor::new("Lampe"), EstimateResult::unavailable())];
        let output = Formatter::new(OutputFormat::Table).format_estimates(&rows);
        assert!(output.contains("Total: 2 items, estimated CAD 150.00, replacement CAD 195.00"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_markdown_estimates() {
        let rows = vec![(make_item(), make_estimate())];
        let output = Formatter::new(OutputFormat::Markdown).format_estimates(&rows);
        assert!(output.contains("| Item | Estimated | Replacement | Samples |"));
        assert!(output.contains("| Canapé en cuir | 150.00 | 195.00 | 3 |"));
    }

    #[test]
    fn test_csv_estimates() {
        let rows = vec![(make_item(), make_estimate())];
        let output = Formatter::new(OutputFormat::Csv).format_estimates(&rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("item,brand,model,category"));
        assert_eq!(lines[1], "Canapé en cuir,IKEA,,Meubles,150.00,195.00,3,dataforseo,buy sofa leather IKEA furniture");
    }

    #[test]
    fn test_listings_empty() {
        assert_eq!(Formatter::new(OutputFormat::Json).format_listings(&[]), "[]");
        assert_eq!(Formatter::new(OutputFormat::Table).format_listings(&[]), "No listings found.");
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_listings(&[]),
            "title,price,currency,seller,url"
        );
    }

    #[test]
    fn test_csv_listings_escaping() {
        let output = Formatter::new(OutputFormat::Csv).format_listings(&[make_listing()]);
        assert!(output.contains("\"KIVIK Sofa, leather\",899,CAD,IKEA,https://ikea.ca/kivik"));
    }

    #[test]
    fn test_csv_listings_escapes_url_and_currency() {
        let listing = Listing::new("Lamp", 45.0, "CAD,USD")
            .with_seller("Wayfair")
            .with_url("https://shop.ca/p?id=1,2&q=\"lamp\"");
        let output = Formatter::new(OutputFormat::Csv).format_listings(&[listing]);

        let row = output.lines().nth(1).unwrap();
        assert_eq!(row, "Lamp,45,\"CAD,USD\",Wayfair,\"https://shop.ca/p?id=1,2&q=\"\"lamp\"\"\"");
    }

    #[test]
    fn test_markdown_listings_link() {
        let output = Formatter::new(OutputFormat::Markdown).format_listings(&[make_listing()]);
        assert!(output.contains("[KIVIK Sofa, leather](https://ikea.ca/kivik)"));
        assert!(output.contains("*1 listings found*"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(Formatter::truncate("Télévision", 20), "Télévision");
        assert_eq!(Formatter::truncate("Réfrigérateur double", 8), "Réfri...");
    }
}
