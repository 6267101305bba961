use super::Report;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use shared::models::Record;
use shared::utils::brazilian_format;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEntry {
    pub row: usize,
    pub date: NaiveDate,
    pub amount: f64,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
}

/// The `n` largest amounts, largest first. Equal amounts keep table order.
pub struct TopRecords {
    n: usize,
    title_max_chars: usize,
}

impl TopRecords {
    pub fn new(n: usize, title_max_chars: usize) -> Self {
        if n == 0 {
            panic!("TopRecords size must be greater than 0");
        }
        Self { n, title_max_chars }
    }
}

impl Report for TopRecords {
    type Output = Vec<TopEntry>;

    fn name(&self) -> &str {
        "top_records"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "n": self.n, "title_max_chars": self.title_max_chars })
    }

    fn calculate<'a, I>(&self, records: I) -> Vec<TopEntry>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut ranked: Vec<&Record> = records.into_iter().collect();
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked
            .into_iter()
            .take(self.n)
            .map(|r| TopEntry {
                row: r.row,
                date: r.date,
                amount: r.amount,
                title: r.title.clone(),
                short_title: r.title.as_deref().map(|t| brazilian_format::shorten_title(t, self.title_max_chars)),
                link: r.link.clone(),
                source: r.source.clone(),
            })
            .collect()
    }
}
