use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ExpenseRecord, Period, format_usd};

/// Per-category USD totals for one lookback window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub period: Period,
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
    /// In order of each category's first occurrence
    pub categories: Vec<CategorySummary>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: f64,
    pub count: usize,
}

/// Result of aggregating a set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub categories: Vec<CategorySummary>,
    pub total: f64,
}

impl Summary {
    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

/// Convert every record to USD and accumulate per-category subtotals
/// and a grand total.
pub fn summarize(records: &[ExpenseRecord]) -> Summary {
    records.iter().fold(Summary::default(), |mut summary, record| {
        let usd = record.usd_amount();
        match summary
            .categories
            .iter_mut()
            .find(|c| c.category == record.category)
        {
            Some(entry) => {
                entry.total += usd;
                entry.count += 1;
            }
            None => summary.categories.push(CategorySummary {
                category: record.category,
                total: usd,
                count: 1,
            }),
        }
        summary.total += usd;
        summary
    })
}

/// Render a report as the multi-line chat reply.
pub fn render_report(report: &ExpenseReport) -> String {
    let mut response = format!("💰 Траты за период ({}):\n", report.period);
    for summary in &report.categories {
        response.push_str(&format!(
            "- {}: {} USD\n",
            summary.category,
            format_usd(summary.total)
        ));
    }
    response.push_str(&format!("\nИтого: {} USD", format_usd(report.total)));
    response
}
