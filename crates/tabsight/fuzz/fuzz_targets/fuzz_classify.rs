//! Fuzz target for column classification and health scoring.
//!
//! Arbitrary cell sequences must classify without panicking, with
//! consistent null accounting and bounded health metrics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabsight::{CellValue, ColumnClassifier, DataTable, Tabsight};

#[derive(Debug, Arbitrary)]
enum FuzzCell {
    Null,
    Number(f64),
    Text(String),
}

impl From<FuzzCell> for CellValue {
    fn from(cell: FuzzCell) -> Self {
        match cell {
            FuzzCell::Null => CellValue::Null,
            FuzzCell::Number(n) => CellValue::Number(n),
            FuzzCell::Text(s) => CellValue::Text(s),
        }
    }
}

fuzz_target!(|cells: Vec<FuzzCell>| {
    if cells.len() > 5_000 {
        return;
    }

    let values: Vec<CellValue> = cells.into_iter().map(CellValue::from).collect();

    let meta = ColumnClassifier::new().classify(&values);
    assert!(meta.null_count <= values.len());
    assert!(meta.stats_match_type());

    // Fold the same cells into a two-column table
    let rows: Vec<Vec<CellValue>> = values
        .chunks(2)
        .map(|pair| pair.to_vec())
        .collect();
    let table = DataTable::new(vec!["left".to_string(), "right".to_string()], rows);
    let health = Tabsight::new().analyze_table(&table).health;
    assert!(health.score <= 100);
    assert!(health.completeness <= 100);
    assert!(health.consistency <= 100);
    assert!(health.diversity <= 100);
});
