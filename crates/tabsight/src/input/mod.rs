//! Input values, tables, and the delimited-file loader.

mod parser;
mod source;
mod value;

pub use parser::{Parser, ParserConfig};
pub use source::{DataTable, RowRecord, SourceMetadata};
pub use value::CellValue;
