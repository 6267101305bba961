// Load-time pipeline: column roles, cell normalization, schema and dataset.
pub mod amount;
pub mod column_roles;
pub mod dataset;
pub mod dates;
pub mod filters;
pub mod schema;

pub use amount::normalize_amount;
pub use column_roles::{detect_role, RoleRule, RoleRules};
pub use dataset::Dataset;
pub use dates::normalize_date;
pub use filters::{FilterOptions, FilterSelection};
pub use schema::{ResolvedColumn, TableSchema};
