use crate::record::SaleRecord;

use std::collections::BTreeMap;
use std::io::Write;

/// Aggregate metrics over a batch of sales records.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub total_transactions: usize,
    pub total_revenue: f64,
    pub most_popular_product: String,
    pub max_quantity_sold_units: i64,
}

/// Computes the summary for `records`. Total: the empty batch yields the
/// all-zero result with an empty product name.
pub fn analyze(records: &[SaleRecord]) -> AnalysisResult {
    let mut total_revenue = 0.0;
    let mut units_by_product: BTreeMap<&str, i64> = BTreeMap::new();

    for record in records {
        total_revenue += record.quantity as f64 * record.price;
        *units_by_product.entry(&record.product).or_insert(0) += record.quantity;
    }

    // Replace only on strictly greater, so a tie keeps the earlier product.
    // BTreeMap iteration makes "earlier" the lexicographically smaller name.
    let mut most_popular_product = "";
    let mut max_quantity_sold_units = 0;
    for (&product, &units) in &units_by_product {
        if units > max_quantity_sold_units {
            max_quantity_sold_units = units;
            most_popular_product = product;
        }
    }

    AnalysisResult {
        total_transactions: records.len(),
        total_revenue,
        most_popular_product: most_popular_product.to_string(),
        max_quantity_sold_units,
    }
}

impl AnalysisResult {
    /// Renders the human-readable report for the file at `path`.
    pub fn write_report<W: Write>(&self, mut writer: W, path: &str) -> std::io::Result<()> {
        writeln!(writer, "--- Sales Record Analysis Report ---")?;
        writeln!(writer, "File Processed: {}", path)?;
        writeln!(writer, "Total Valid Transactions: {}", self.total_transactions)?;
        writeln!(writer, "Total Revenue: {:.2} $", self.total_revenue)?;
        writeln!(
            writer,
            "Most Popular Product: {} (sold {} units)",
            self.most_popular_product, self.max_quantity_sold_units
        )?;
        writeln!(writer, "------------------------------------")
    }
}
