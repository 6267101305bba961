// Engine library root
// Column role detection, monetary normalization, filtering and reports for
// investment news tables.

pub mod config;
pub mod data;
pub mod error;
pub mod reports;
pub mod services;

pub use data::{detect_role, normalize_amount};
pub use error::EngineError;
