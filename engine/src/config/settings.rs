// Pipeline settings, loaded from a JSON config file or built in code.
use crate::data::column_roles::RoleRules;
use crate::error::{EngineError, Result};
use serde::Deserialize;
use shared::models::Role;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineSettings {
    pub roles: RoleRules,
    /// Use the first column as the date when no keyword matches.
    pub date_fallback_to_first_column: bool,
    pub amount_required: bool,
    pub top_n: usize,
    pub title_max_chars: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        PipelineSettings {
            roles: RoleRules::default(),
            date_fallback_to_first_column: true,
            amount_required: true,
            top_n: 10,
            title_max_chars: 50,
        }
    }
}

impl PipelineSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: PipelineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded pipeline settings file");
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(EngineError::ConfigError("top_n must be greater than 0".to_string()));
        }
        // The amount role can resolve through exact candidates alone.
        let amount_has_candidates = !self.roles.amount_exact_candidates.is_empty();
        if let Some(rule) = self.roles.rules.iter().find(|r| {
            r.keywords.iter().all(|k| k.trim().is_empty()) && !(r.role == Role::Amount && amount_has_candidates)
        }) {
            return Err(EngineError::ConfigError(format!(
                "role rule for {} has no keywords",
                rule.role
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = PipelineSettings::default();
        assert!(settings.date_fallback_to_first_column);
        assert!(settings.amount_required);
        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.title_max_chars, 50);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = PipelineSettings::from_json_str(r#"{"top_n": 5, "date_fallback_to_first_column": false}"#).unwrap();
        assert_eq!(settings.top_n, 5);
        assert!(!settings.date_fallback_to_first_column);
        assert_eq!(settings.roles, RoleRules::default());
    }

    #[test]
    fn test_custom_roles_from_json() {
        let json = r#"{
            "roles": {
                "rules": [
                    {"role": "date", "keywords": ["quando"]},
                    {"role": "monetary_amount", "keywords": ["montante"]}
                ]
            }
        }"#;
        let settings = PipelineSettings::from_json_str(json).unwrap();
        assert_eq!(settings.roles.detect(&["Quando", "Montante"], Role::Date), Some("Quando"));
        // exact candidates keep their defaults when omitted
        assert_eq!(settings.roles.detect(&["Montante", "Valor"], Role::Amount), Some("Valor"));
        assert_eq!(settings.roles.detect(&["Montante total"], Role::Amount), Some("Montante total"));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = PipelineSettings::from_json_str(r#"{"top_n": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));

        let err = PipelineSettings::from_json_str(r#"{"roles": {"rules": [{"role": "city", "keywords": []}]}}"#).unwrap_err();
        assert!(err.to_string().contains("role rule for city has no keywords"));

        let err = PipelineSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse { .. }));
    }

    #[test]
    fn test_amount_rule_may_rely_on_exact_candidates() {
        let json = r#"{"roles": {"rules": [{"role": "amount", "keywords": []}], "amount_exact_candidates": ["Montante"]}}"#;
        let settings = PipelineSettings::from_json_str(json).unwrap();
        assert_eq!(settings.roles.detect(&["Montante"], Role::Amount), Some("Montante"));

        let json = r#"{"roles": {"rules": [{"role": "amount", "keywords": []}], "amount_exact_candidates": []}}"#;
        let err = PipelineSettings::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("role rule for monetary amount has no keywords"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"amount_required": false, "title_max_chars": 30}}"#).unwrap();
        file.flush().unwrap();

        let settings = PipelineSettings::from_file(file.path()).unwrap();
        assert!(!settings.amount_required);
        assert_eq!(settings.title_max_chars, 30);
    }

    #[test]
    fn test_from_missing_file() {
        let err = PipelineSettings::from_file("does_not_exist.json").unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}
