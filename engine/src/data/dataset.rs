// Cleaned, immutable dataset: one Record per usable source row.
use crate::config::PipelineSettings;
use crate::data::amount::normalize_amount;
use crate::data::dates::normalize_date;
use crate::data::schema::{ResolvedColumn, TableSchema};
use crate::error::{EngineError, Result};
use chrono::NaiveDate;
use shared::models::{RawTable, Record};

#[derive(Debug, Clone)]
pub struct Dataset {
    schema: TableSchema,
    records: Vec<Record>,
    total_rows: usize,
}

impl Dataset {
    /// Resolves the schema and normalizes every row. Rows lacking either a
    /// readable date or a readable amount are dropped; an empty result is an
    /// error since nothing downstream can work with it.
    pub fn from_table(table: &RawTable, settings: &PipelineSettings) -> Result<Self> {
        let schema = TableSchema::resolve(&table.columns, settings)?;
        let total_rows = table.len();

        let text_of = |row: usize, column: &Option<ResolvedColumn>| {
            column.as_ref().and_then(|c| table.cell(row, c.index).as_text())
        };

        let mut records = Vec::with_capacity(total_rows);
        let mut missing_date = 0usize;
        let mut missing_amount = 0usize;

        for row in 0..total_rows {
            let date = normalize_date(table.cell(row, schema.date.index));
            let amount = schema.amount.as_ref().and_then(|c| normalize_amount(table.cell(row, c.index)));

            let (date, amount) = match (date, amount) {
                (Some(date), Some(amount)) => (date, amount),
                (date, amount) => {
                    if date.is_none() {
                        missing_date += 1;
                    }
                    if amount.is_none() {
                        missing_amount += 1;
                    }
                    continue;
                }
            };

            records.push(Record {
                row,
                date,
                amount,
                title: text_of(row, &schema.title),
                link: text_of(row, &schema.link),
                source: text_of(row, &schema.source),
                region: text_of(row, &schema.region),
                city: text_of(row, &schema.city),
            });
        }

        let dropped = total_rows - records.len();
        tracing::info!(
            total_rows,
            kept = records.len(),
            dropped,
            missing_date,
            missing_amount,
            "Normalized table"
        );

        if records.is_empty() {
            tracing::error!(total_rows, "No valid records after cleaning");
            return Err(EngineError::NoValidRecords { total_rows });
        }

        Ok(Dataset { schema, records, total_rows })
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn dropped_rows(&self) -> usize {
        self.total_rows - self.records.len()
    }

    /// Earliest and latest record dates. Never empty once constructed.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let first = self.records[0].date;
        self.records.iter().fold((first, first), |(min, max), r| (min.min(r.date), max.max(r.date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{RawCell, Role};

    fn news_table() -> RawTable {
        RawTable::new(vec![
            "Título".into(),
            "Data Publicação".into(),
            "Fonte".into(),
            "Região".into(),
            "Cidade".into(),
            "Valor".into(),
        ])
        .with_row(vec![
            RawCell::from("Porto recebe aporte"),
            RawCell::from("10/01/2024"),
            RawCell::from("Governo ES"),
            RawCell::from("Metropolitana"),
            RawCell::from("Vitória"),
            RawCell::from("R$ 1.234,56"),
        ])
        .with_row(vec![
            RawCell::from("Escola nova"),
            RawCell::from("15/02/2024"),
            RawCell::from("A Gazeta"),
            RawCell::Empty,
            RawCell::from(" Serra "),
            RawCell::Number(5000.0),
        ])
        .with_row(vec![
            RawCell::from("Sem valor"),
            RawCell::from("20/02/2024"),
            RawCell::from("A Gazeta"),
            RawCell::Empty,
            RawCell::Empty,
            RawCell::from("a definir"),
        ])
        .with_row(vec![
            RawCell::from("Sem data"),
            RawCell::from("em breve"),
            RawCell::from("Governo ES"),
            RawCell::Empty,
            RawCell::Empty,
            RawCell::from("100,00"),
        ])
    }

    #[test]
    fn test_from_table_normalizes_and_drops_invalid_rows() {
        let dataset = Dataset::from_table(&news_table(), &PipelineSettings::default()).unwrap();
        assert_eq!(dataset.total_rows(), 4);
        assert_eq!(dataset.records().len(), 2);
        assert_eq!(dataset.dropped_rows(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.row, 0);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!((first.amount - 1234.56).abs() < 1e-9);
        assert_eq!(first.dimension(Role::City), Some("Vitória"));

        let second = &dataset.records()[1];
        assert_eq!(second.row, 1);
        assert_eq!(second.amount, 5000.0);
        assert_eq!(second.region, None);
        assert_eq!(second.city.as_deref(), Some("Serra"));
    }

    #[test]
    fn test_link_column_is_carried() {
        let table = RawTable::new(vec!["Título".into(), "Link".into(), "Data".into(), "Valor".into()])
            .with_row(["Porto", "https://exemplo.com.br/porto", "10/01/2024", "R$ 10,00"])
            .with_row(["Escola", "", "11/01/2024", "R$ 20,00"]);
        let dataset = Dataset::from_table(&table, &PipelineSettings::default()).unwrap();
        assert_eq!(dataset.records()[0].dimension(Role::Link), Some("https://exemplo.com.br/porto"));
        assert_eq!(dataset.records()[1].link, None);
    }

    #[test]
    fn test_date_range() {
        let dataset = Dataset::from_table(&news_table(), &PipelineSettings::default()).unwrap();
        assert_eq!(
            dataset.date_range(),
            (NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())
        );
    }

    #[test]
    fn test_no_valid_records() {
        let table = RawTable::new(vec!["Data".into(), "Valor".into()])
            .with_row(["??", "abc"])
            .with_row(["01/01/2024", ""]);
        let err = Dataset::from_table(&table, &PipelineSettings::default()).unwrap_err();
        assert!(matches!(err, EngineError::NoValidRecords { total_rows: 2 }));
        assert!(err.is_invalid_dataset());
    }

    #[test]
    fn test_missing_amount_column_propagates() {
        let table = RawTable::new(vec!["Data".into(), "Preco".into()]).with_row(["01/01/2024", "10"]);
        let err = Dataset::from_table(&table, &PipelineSettings::default()).unwrap_err();
        assert!(matches!(err, EngineError::MissingMandatoryColumn { role: Role::Amount, .. }));
    }

    #[test]
    fn test_optional_amount_column_drops_everything() {
        let settings = PipelineSettings { amount_required: false, ..Default::default() };
        let table = RawTable::new(vec!["Data".into(), "Preco".into()]).with_row(["01/01/2024", "10"]);
        let err = Dataset::from_table(&table, &settings).unwrap_err();
        assert!(matches!(err, EngineError::NoValidRecords { .. }));
    }

    #[test]
    fn test_fallback_date_column_is_used() {
        let table = RawTable::new(vec!["Quando".into(), "Valor".into()]).with_row(["2024-03-01", "1,5"]);
        let dataset = Dataset::from_table(&table, &PipelineSettings::default()).unwrap();
        assert_eq!(dataset.records()[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dataset.records()[0].amount, 1.5);
        assert_eq!(dataset.schema().warnings.len(), 1);
    }
}
