// Formatting and parsing helpers for the pt-BR conventions used across the
// engine and any presentation layer on top of it.

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use chrono::{NaiveDate, NaiveDateTime};

    const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];
    const DATETIME_FORMATS: &[&str] = &[
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    // Day-first: "03/04/2024" is the 3rd of April.
    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        let trimmed = s.trim();
        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(dt.date());
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(date);
            }
        }
        Err(anyhow!("Failed to parse date '{}'", s))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    /// Groups the integer part with '.' and uses ',' as the decimal mark.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if value.is_sign_negative() && formatted.bytes().any(|b| b != b'0' && b != b'.') {
            "-"
        } else {
            ""
        };
        match frac_part {
            Some(frac) => format!("{}{},{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Compact BRL rendering used by the KPI cards: billions and millions get
    /// one decimal and a suffix, everything else two decimals.
    pub fn format_reais(value: f64) -> String {
        if value >= 1_000_000_000.0 {
            format!("R$ {} bi", format_decimal(value / 1_000_000_000.0, 1))
        } else if value >= 1_000_000.0 {
            format!("R$ {} mi", format_decimal(value / 1_000_000.0, 1))
        } else {
            format!("R$ {}", format_decimal(value, 2))
        }
    }

    pub fn format_count(count: usize) -> String {
        format_decimal(count as f64, 0)
    }

    pub fn shorten_title(title: &str, max_chars: usize) -> String {
        if title.chars().count() > max_chars {
            let head: String = title.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            title.to_string()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Datelike;

        #[test]
        fn test_parse_date_day_first() {
            let date = parse_date("03/04/2024").unwrap();
            assert_eq!((date.year(), date.month(), date.day()), (2024, 4, 3));
        }

        #[test]
        fn test_parse_date_with_time_and_iso() {
            assert_eq!(parse_date("30/12/2024 18:20:00").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
            assert_eq!(parse_date("2024-12-30").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
            assert_eq!(parse_date("2024-12-30T08:15:00").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        }

        #[test]
        fn test_parse_date_invalid() {
            assert!(parse_date("32/12/2024").is_err());
            assert!(parse_date("ontem").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_format_decimal_grouping() {
            assert_eq!(format_decimal(1234.56, 2), "1.234,56");
            assert_eq!(format_decimal(600822115.84, 2), "600.822.115,84");
            assert_eq!(format_decimal(999.0, 2), "999,00");
            assert_eq!(format_decimal(-1234.5, 2), "-1.234,50");
            assert_eq!(format_decimal(-0.001, 2), "0,00");
        }

        #[test]
        fn test_format_reais_thresholds() {
            assert_eq!(format_reais(1_500_000_000.0), "R$ 1,5 bi");
            assert_eq!(format_reais(2_340_000.0), "R$ 2,3 mi");
            assert_eq!(format_reais(1234.5), "R$ 1.234,50");
            assert_eq!(format_reais(0.0), "R$ 0,00");
        }

        #[test]
        fn test_format_count() {
            assert_eq!(format_count(0), "0");
            assert_eq!(format_count(1234567), "1.234.567");
        }

        #[test]
        fn test_shorten_title() {
            assert_eq!(shorten_title("Curto", 50), "Curto");
            let long = "a".repeat(60);
            assert_eq!(shorten_title(&long, 50), format!("{}...", "a".repeat(50)));
            assert_eq!(shorten_title("Ação ótima", 4), "Ação...");
        }
    }
}
