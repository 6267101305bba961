use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell exactly as the data source handed it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Empty,
    Number(f64),
    Text(String),
}

impl RawCell {
    /// True for `Empty`, NaN and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Number(v) => v.is_nan(),
            RawCell::Text(s) => s.trim().is_empty(),
        }
    }

    /// Trimmed textual form of the cell, `None` when blank.
    /// Numbers are rendered without a trailing `.0` for whole values.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Number(v) if v.is_nan() => None,
            RawCell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => Some(format!("{}", *v as i64)),
            RawCell::Number(v) => Some(v.to_string()),
            RawCell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

impl Default for RawCell {
    fn default() -> Self {
        RawCell::Empty
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Number(value as f64)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawCell::Empty, Into::into)
    }
}

/// Semantic purpose a column can serve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Date,
    #[serde(alias = "monetary_amount")]
    Amount,
    Source,
    Region,
    City,
    Title,
    Link,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Date => "date",
            Role::Amount => "monetary amount",
            Role::Source => "source",
            Role::Region => "region",
            Role::City => "city",
            Role::Title => "title",
            Role::Link => "link",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory table as produced by whatever loader the caller uses.
/// Rows shorter than the header are padded with `Empty` on access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn with_row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<RawCell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn cell(&self, row: usize, column: usize) -> &RawCell {
        static EMPTY: RawCell = RawCell::Empty;
        self.rows.get(row).and_then(|r| r.get(column)).unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One cleaned row: a valid date and a normalized amount are guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub row: usize,
    pub date: NaiveDate,
    pub amount: f64,
    pub title: Option<String>,
    /// URL of the news item, when the table has one.
    pub link: Option<String>,
    pub source: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

impl Record {
    /// Value of a categorical role; `None` for date and amount.
    pub fn dimension(&self, role: Role) -> Option<&str> {
        match role {
            Role::Title => self.title.as_deref(),
            Role::Link => self.link.as_deref(),
            Role::Source => self.source.as_deref(),
            Role::Region => self.region.as_deref(),
            Role::City => self.city.as_deref(),
            Role::Date | Role::Amount => None,
        }
    }
}
