use super::Report;
use chrono::Datelike;
use serde::Serialize;
use serde_json::Value;
use shared::models::Record;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    /// "mm/yyyy"
    pub label: String,
    pub total: f64,
    pub count: usize,
}

/// Amount totals per calendar month, oldest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyTotals;

impl Report for MonthlyTotals {
    type Output = Vec<MonthlyTotal>;

    fn name(&self) -> &str {
        "monthly_totals"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": "month" })
    }

    fn calculate<'a, I>(&self, records: I) -> Vec<MonthlyTotal>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut months: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
        for record in records {
            let entry = months.entry((record.date.year(), record.date.month())).or_insert((0.0, 0));
            entry.0 += record.amount;
            entry.1 += 1;
        }

        months
            .into_iter()
            .map(|((year, month), (total, count))| MonthlyTotal {
                year,
                month,
                label: format!("{:02}/{}", month, year),
                total,
                count,
            })
            .collect()
    }
}
