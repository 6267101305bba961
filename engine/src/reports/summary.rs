use super::Report;
use serde::Serialize;
use serde_json::Value;
use shared::models::Record;
use shared::utils::brazilian_format;

/// Record count, total and mean. An empty input yields zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
}

impl Summary {
    /// Aggregates optional amounts. Missing values are left out of both the
    /// total and the count; they are not treated as zero.
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let (count, total) = amounts
            .into_iter()
            .flatten()
            .fold((0usize, 0.0f64), |(count, total), amount| (count + 1, total + amount));
        let mean = if count > 0 { total / count as f64 } else { 0.0 };
        Summary { count, total, mean }
    }

    pub fn formatted_count(&self) -> String {
        brazilian_format::format_count(self.count)
    }

    pub fn formatted_total(&self) -> String {
        brazilian_format::format_reais(self.total)
    }

    pub fn formatted_mean(&self) -> String {
        brazilian_format::format_reais(self.mean)
    }
}

impl Report for Summary {
    type Output = Summary;

    fn name(&self) -> &str {
        "summary"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({})
    }

    fn calculate<'a, I>(&self, records: I) -> Summary
    where
        I: IntoIterator<Item = &'a Record>,
    {
        Summary::from_amounts(records.into_iter().map(|r| Some(r.amount)))
    }
}
