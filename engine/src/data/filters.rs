// Per-request filter selections and the option lists a UI offers for them.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::Record;
use std::collections::BTreeSet;

/// Immutable filter selection. `None` on any field means "no restriction";
/// the default value selects everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub source: Option<String>,
    pub regions: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
}

impl FilterSelection {
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = Some(cities.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == FilterSelection::default()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.date_from.map_or(true, |from| record.date >= from)
            && self.date_to.map_or(true, |to| record.date <= to)
            && self.source.as_deref().map_or(true, |s| record.source.as_deref() == Some(s))
            && within(&self.regions, record.region.as_deref())
            && within(&self.cities, record.city.as_deref())
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

// A record without a value never belongs to an explicit selection.
fn within(selected: &Option<Vec<String>>, value: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(list) => value.map_or(false, |v| list.iter().any(|s| s == v)),
    }
}

/// Choices derived from the loaded records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    pub sources: Vec<String>,
    pub regions: Vec<String>,
    pub cities: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        let distinct = |pick: fn(&Record) -> Option<&str>| -> Vec<String> {
            records
                .iter()
                .filter_map(pick)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        FilterOptions {
            date_min: records.iter().map(|r| r.date).min(),
            date_max: records.iter().map(|r| r.date).max(),
            sources: distinct(|r| r.source.as_deref()),
            regions: distinct(|r| r.region.as_deref()),
            cities: distinct(|r| r.city.as_deref()),
        }
    }

    /// Cities present in the given regions, sorted. Cascades the region
    /// choice into the city list.
    pub fn cities_within(records: &[Record], regions: &[String]) -> Vec<String> {
        records
            .iter()
            .filter(|r| r.region.as_ref().map_or(false, |region| regions.contains(region)))
            .filter_map(|r| r.city.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
