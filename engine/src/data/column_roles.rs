// Column role detection: maps column names to the semantic role they play,
// using an ordered keyword table. First column (in table order) wins.
use serde::{Deserialize, Deserializer, Serialize};
use shared::models::Role;

/// Keywords identifying one role. Stored lowercased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRule {
    pub role: Role,
    #[serde(deserialize_with = "lowercase_keywords")]
    pub keywords: Vec<String>,
}

fn lowercase_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keywords = Vec::<String>::deserialize(deserializer)?;
    Ok(keywords.into_iter().map(|k| k.to_lowercase()).collect())
}

impl RoleRule {
    pub fn new<I, S>(role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RoleRule {
            role,
            keywords: keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }

    fn matches(&self, lowered_column: &str) -> bool {
        self.keywords.iter().any(|k| lowered_column.contains(k.as_str()))
    }
}

/// Ordered (role → keywords) table plus the exact-name candidates tried
/// before keyword matching for the monetary amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleRules {
    pub rules: Vec<RoleRule>,
    pub amount_exact_candidates: Vec<String>,
}

impl Default for RoleRules {
    fn default() -> Self {
        RoleRules {
            rules: vec![
                RoleRule::new(Role::Date, ["data", "publicacao", "date"]),
                RoleRule::new(Role::Amount, ["invest"]),
                RoleRule::new(Role::Source, ["fonte", "source"]),
                RoleRule::new(Role::Region, ["região", "regiao", "region"]),
                RoleRule::new(Role::City, ["cidade", "município", "municipio", "city"]),
                RoleRule::new(Role::Title, ["título", "titulo", "title"]),
                RoleRule::new(Role::Link, ["link", "url"]),
            ],
            amount_exact_candidates: vec![
                "Valores_Monetarios".to_string(),
                "Valores".to_string(),
                "Valor".to_string(),
            ],
        }
    }
}

impl RoleRules {
    /// Rules with no keywords and no exact candidates; everything resolves to `None`.
    pub fn empty() -> Self {
        RoleRules { rules: Vec::new(), amount_exact_candidates: Vec::new() }
    }

    /// Adds keywords for a role. If the role already has a rule the keywords
    /// are appended to it, keeping the existing ones ahead in priority.
    pub fn register<I, S>(mut self, role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let new_rule = RoleRule::new(role, keywords);
        match self.rules.iter_mut().find(|r| r.role == role) {
            Some(existing) => existing.keywords.extend(new_rule.keywords),
            None => self.rules.push(new_rule),
        }
        self
    }

    /// Replaces the keyword set of a role entirely.
    pub fn with_keywords<I, S>(mut self, role: Role, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rules.retain(|r| r.role != role);
        self.rules.push(RoleRule::new(role, keywords));
        self
    }

    pub fn keywords(&self, role: Role) -> impl Iterator<Item = &str> + '_ {
        self.rules
            .iter()
            .filter(move |r| r.role == role)
            .flat_map(|r| r.keywords.iter().map(String::as_str))
    }

    /// Resolves `role` against `columns`, returning the matching column name.
    pub fn detect<'a, S: AsRef<str>>(&self, columns: &'a [S], role: Role) -> Option<&'a str> {
        self.detect_index(columns, role).map(move |i| columns[i].as_ref())
    }

    /// Same as [`RoleRules::detect`] but yields the column position.
    pub fn detect_index<S: AsRef<str>>(&self, columns: &[S], role: Role) -> Option<usize> {
        if role == Role::Amount {
            let exact = self
                .amount_exact_candidates
                .iter()
                .find_map(|candidate| columns.iter().position(|c| c.as_ref() == candidate.as_str()));
            if exact.is_some() {
                return exact;
            }
        }

        let rules: Vec<&RoleRule> = self.rules.iter().filter(|r| r.role == role).collect();
        if rules.is_empty() {
            return None;
        }
        columns.iter().position(|column| {
            let lowered = column.as_ref().to_lowercase();
            rules.iter().any(|rule| rule.matches(&lowered))
        })
    }
}

/// Resolves a role with the default keyword table.
pub fn detect_role<S: AsRef<str>>(columns: &[S], role: Role) -> Option<&str> {
    RoleRules::default().detect(columns, role)
}
