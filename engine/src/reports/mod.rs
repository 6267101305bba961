// Aggregations over cleaned records
pub mod breakdown;
pub mod monthly;
pub mod summary;
pub mod top;

pub use breakdown::{Breakdown, DimensionTotal};
pub use monthly::{MonthlyTotal, MonthlyTotals};
pub use summary::Summary;
pub use top::{TopEntry, TopRecords};

use serde_json::Value;
use shared::models::Record;

// Common trait for all reports
pub trait Report {
    type Output;

    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this report instance
    fn calculate<'a, I>(&self, records: I) -> Self::Output
    where
        I: IntoIterator<Item = &'a Record>;
}
