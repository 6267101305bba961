pub mod models;
pub mod utils;

pub use models::{RawCell, RawTable, Record, Role};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_cell_blank_detection() {
        assert!(RawCell::Empty.is_blank());
        assert!(RawCell::from("   ").is_blank());
        assert!(RawCell::Number(f64::NAN).is_blank());
        assert!(!RawCell::Number(0.0).is_blank());
        assert!(!RawCell::from("R$").is_blank());
    }

    #[test]
    fn test_raw_cell_as_text() {
        assert_eq!(RawCell::from("  Vitória ").as_text().as_deref(), Some("Vitória"));
        assert_eq!(RawCell::Number(2024.0).as_text().as_deref(), Some("2024"));
        assert_eq!(RawCell::Number(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(RawCell::from(None::<&str>).as_text(), None);
    }

    #[test]
    fn test_raw_table_pads_short_rows() {
        let table = RawTable::new(vec!["A".into(), "B".into()]).with_row(["only"]);
        assert_eq!(table.cell(0, 0), &RawCell::from("only"));
        assert_eq!(table.cell(0, 1), &RawCell::Empty);
        assert_eq!(table.cell(5, 0), &RawCell::Empty);
    }

    #[test]
    fn test_role_deserializes_from_snake_case() {
        let role: Role = serde_json::from_str("\"monetary_amount\"").unwrap();
        assert_eq!(role, Role::Amount);
        let role: Role = serde_json::from_str("\"region\"").unwrap();
        assert_eq!(role, Role::Region);
    }
}
