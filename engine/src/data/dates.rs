use chrono::NaiveDate;
use shared::models::RawCell;
use shared::utils::brazilian_format;

/// Day-first coercion of a date cell; anything unreadable becomes `None`.
/// Numeric cells carry no calendar information and are rejected.
pub fn normalize_date(raw: &RawCell) -> Option<NaiveDate> {
    match raw {
        RawCell::Text(s) if !s.trim().is_empty() => brazilian_format::parse_date(s).ok(),
        _ => None,
    }
}
