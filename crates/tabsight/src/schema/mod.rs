//! Column types and per-column metadata.

mod column;
mod types;

pub use column::ColumnMeta;
pub use types::ColumnType;
