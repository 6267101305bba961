use super::Report;
use serde::Serialize;
use serde_json::Value;
use shared::models::{Record, Role};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionTotal {
    pub value: String,
    pub total: f64,
    pub count: usize,
}

/// Amount totals grouped by a categorical role, largest first.
/// Records with no value for the role are left out.
pub struct Breakdown {
    name: String,
    role: Role,
}

impl Breakdown {
    pub fn new(role: Role) -> Self {
        Self {
            name: format!("breakdown_by_{}", role),
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Report for Breakdown {
    type Output = Vec<DimensionTotal>;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "role": self.role })
    }

    fn calculate<'a, I>(&self, records: I) -> Vec<DimensionTotal>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut groups: HashMap<&str, (f64, usize)> = HashMap::new();
        for record in records {
            if let Some(value) = record.dimension(self.role) {
                let entry = groups.entry(value).or_insert((0.0, 0));
                entry.0 += record.amount;
                entry.1 += 1;
            }
        }

        let mut totals: Vec<DimensionTotal> = groups
            .into_iter()
            .map(|(value, (total, count))| DimensionTotal { value: value.to_string(), total, count })
            .collect();
        totals.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.value.cmp(&b.value)));
        totals
    }
}
