// Schema mapping: resolves every role once, at load time, into a typed
// descriptor the rest of the pipeline reads instead of re-matching names.
use crate::config::PipelineSettings;
use crate::error::{EngineError, Result};
use serde::Serialize;
use shared::models::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    pub date: ResolvedColumn,
    pub amount: Option<ResolvedColumn>,
    pub title: Option<ResolvedColumn>,
    pub link: Option<ResolvedColumn>,
    pub source: Option<ResolvedColumn>,
    pub region: Option<ResolvedColumn>,
    pub city: Option<ResolvedColumn>,
    /// Messages meant for the end user (e.g. a guessed date column).
    pub warnings: Vec<String>,
}

impl TableSchema {
    pub fn resolve<S: AsRef<str>>(columns: &[S], settings: &PipelineSettings) -> Result<Self> {
        let rules = &settings.roles;
        let resolve = |role: Role| {
            rules.detect_index(columns, role).map(|index| {
                let name = columns[index].as_ref().to_string();
                tracing::info!(%role, column = %name, index, "Resolved column role");
                ResolvedColumn { index, name }
            })
        };
        let mut warnings = Vec::new();

        let date = match resolve(Role::Date) {
            Some(column) => column,
            None if settings.date_fallback_to_first_column && !columns.is_empty() => {
                let name = columns[0].as_ref().to_string();
                let message = format!(
                    "No date column found by name; using the first column '{}' as the date",
                    name
                );
                tracing::warn!(column = %name, "{}", message);
                warnings.push(message);
                ResolvedColumn { index: 0, name }
            }
            None => return Err(missing(Role::Date, columns)),
        };

        let amount = resolve(Role::Amount);
        if amount.is_none() {
            if settings.amount_required {
                return Err(missing(Role::Amount, columns));
            }
            let message = "No monetary amount column found; every row will be dropped".to_string();
            tracing::warn!("{}", message);
            warnings.push(message);
        }

        Ok(TableSchema {
            date,
            amount,
            title: resolve(Role::Title),
            link: resolve(Role::Link),
            source: resolve(Role::Source),
            region: resolve(Role::Region),
            city: resolve(Role::City),
            warnings,
        })
    }

    pub fn column(&self, role: Role) -> Option<&ResolvedColumn> {
        match role {
            Role::Date => Some(&self.date),
            Role::Amount => self.amount.as_ref(),
            Role::Title => self.title.as_ref(),
            Role::Link => self.link.as_ref(),
            Role::Source => self.source.as_ref(),
            Role::Region => self.region.as_ref(),
            Role::City => self.city.as_ref(),
        }
    }

    pub fn has(&self, role: Role) -> bool {
        self.column(role).is_some()
    }
}

fn missing<S: AsRef<str>>(role: Role, columns: &[S]) -> EngineError {
    tracing::error!(%role, "Mandatory column could not be resolved");
    EngineError::MissingMandatoryColumn {
        role,
        columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
    }
}
