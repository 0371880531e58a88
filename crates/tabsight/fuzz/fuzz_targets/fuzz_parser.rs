//! Fuzz target for the delimited-file loader.
//!
//! The loader must never panic on malformed input, whatever the
//! delimiter, and any table it returns must be analyzable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabsight::input::Parser;
use tabsight::Tabsight;

const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 || data.is_empty() {
        return;
    }

    let delimiter = DELIMITERS[data[0] as usize % DELIMITERS.len()];
    let parser = Parser::new();

    if let Ok(table) = parser.parse_bytes(&data[1..], delimiter) {
        let analysis = Tabsight::new().analyze_table(&table);
        assert_eq!(analysis.columns.len(), table.column_count());
        assert!(analysis.health.score <= 100);
    }
});
