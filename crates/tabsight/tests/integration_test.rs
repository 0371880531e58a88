//! Integration tests for Tabsight.

use std::io::Write;
use tempfile::NamedTempFile;

use tabsight::input::ParserConfig;
use tabsight::{CellValue, ColumnType, InsightsPayload, Tabsight, TabsightConfig, TabsightError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    create_test_file_with_suffix(content, ".csv")
}

fn create_test_file_with_suffix(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn column_type(result: &tabsight::AnalysisResult, name: &str) -> ColumnType {
    result
        .analysis
        .columns
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.column_type)
        .expect("column present")
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_analyze_basic_csv() {
    let content = "id,name,age,active\n\
                   1,Alice,30,true\n\
                   2,Bob,25,false\n\
                   3,Carol,28,true\n";
    let file = create_test_file(content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(result.source.row_count, 3);
    assert_eq!(result.source.column_count, 4);
    assert_eq!(result.source.format, "csv");
    assert!(result.source.hash.starts_with("sha256:"));
    assert_eq!(result.analysis.columns.len(), 4);

    let names: Vec<&str> = result.analysis.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "age", "active"]);
}

#[test]
fn test_analyze_tsv_auto_detect() {
    let content = "sample_id\tdiagnosis\tage\n\
                   S001\tCD\t25\n\
                   S002\tUC\t30\n\
                   S003\tControl\t28\n";
    let file = create_test_file(content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(result.source.format, "tsv");
    assert_eq!(result.analysis.columns.len(), 3);
}

#[test]
fn test_tsv_extension_forces_tab() {
    let file = create_test_file_with_suffix("a,b\n1,2\n3,4\n", ".tsv");

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(result.source.column_count, 1);
    assert_eq!(result.analysis.columns[0].name, "a,b");
}

#[test]
fn test_spreadsheets_are_rejected() {
    let file = create_test_file_with_suffix("not really a workbook", ".xlsx");

    let err = Tabsight::new().analyze(file.path()).unwrap_err();
    assert!(matches!(err, TabsightError::UnsupportedFormat(_)));
}

#[test]
fn test_empty_inputs_are_errors() {
    let empty = create_test_file("");
    let err = Tabsight::new().analyze(empty.path()).unwrap_err();
    assert!(matches!(err, TabsightError::EmptyData(_)));

    let header_only = create_test_file("a,b\n");
    let err = Tabsight::new().analyze(header_only.path()).unwrap_err();
    assert!(matches!(err, TabsightError::EmptyData(_)));
}

#[test]
fn test_ragged_rows_are_padded_with_nulls() {
    let file = create_test_file("a,b,c\n1,2,3\n4,5\n6,7,8\n");

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(result.analysis.columns[2].null_count, 1);
    // 1 null out of 9 cells
    assert_eq!(result.analysis.health.completeness, 89);
}

#[test]
fn test_duplicate_and_blank_headers_are_renamed() {
    let file = create_test_file("x,x,\n1,2,3\n4,5,6\n");

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let names: Vec<&str> = result.analysis.columns.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["x", "x_2", "column_3"]);
}

#[test]
fn test_max_rows_limits_loading() {
    let mut content = String::from("n\n");
    for i in 0..50 {
        content.push_str(&format!("{}\n", i));
    }
    let file = create_test_file(&content);

    let config = TabsightConfig {
        parser: ParserConfig {
            max_rows: Some(20),
            ..ParserConfig::default()
        },
        ..TabsightConfig::default()
    };
    let result = Tabsight::with_config(config).analyze(file.path()).expect("Analysis failed");

    assert_eq!(result.source.row_count, 20);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_identifier_columns() {
    let mut content = String::from("order_id,token,amount\n");
    for i in 1..=15 {
        content.push_str(&format!("{},a1b2c3d4-{:04x},{}.5\n", i, i * 31, i % 4));
    }
    let file = create_test_file(&content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");

    assert_eq!(column_type(&result, "order_id"), ColumnType::Id);
    assert_eq!(column_type(&result, "token"), ColumnType::Id);
    assert_eq!(column_type(&result, "amount"), ColumnType::Numeric);

    let id = &result.analysis.columns[0];
    assert!(id.min.is_none() && id.max.is_none() && id.mean.is_none());
}

#[test]
fn test_date_column_uses_lexicographic_bounds() {
    let content = "when,value\n\
                   2024-03-01,1\n\
                   2023-12-31,2\n\
                   2024-01-15,3\n\
                   ,4\n\
                   2024-02-29,5\n";
    let file = create_test_file(content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let when = &result.analysis.columns[0];

    assert_eq!(when.column_type, ColumnType::Date);
    assert_eq!(when.null_count, 1);
    assert_eq!(when.min, Some(CellValue::from("2023-12-31")));
    assert_eq!(when.max, Some(CellValue::from("2024-03-01")));
    assert!(when.mean.is_none());
}

#[test]
fn test_numeric_threshold_from_file() {
    let build = |numeric: usize| {
        let mut content = String::from("reading\n");
        for i in 0..100 {
            if i < numeric {
                content.push_str(&format!("{}\n", i % 40));
            } else {
                content.push_str("garbage\n");
            }
        }
        content
    };

    let above = create_test_file(&build(86));
    let result = Tabsight::new().analyze(above.path()).expect("Analysis failed");
    assert_eq!(result.analysis.columns[0].column_type, ColumnType::Numeric);

    let at = create_test_file(&build(85));
    let result = Tabsight::new().analyze(at.path()).expect("Analysis failed");
    assert_ne!(result.analysis.columns[0].column_type, ColumnType::Numeric);
}

#[test]
fn test_untyped_loading_still_classifies_numbers() {
    let file = create_test_file("price\n1.5\n2.5\n3\n");
    let config = TabsightConfig {
        parser: ParserConfig {
            dynamic_typing: false,
            ..ParserConfig::default()
        },
        ..TabsightConfig::default()
    };

    let result = Tabsight::with_config(config).analyze(file.path()).expect("Analysis failed");
    let price = &result.analysis.columns[0];

    assert_eq!(price.column_type, ColumnType::Numeric);
    assert_eq!(price.min, Some(CellValue::Number(1.5)));
    assert_eq!(price.max, Some(CellValue::Number(3.0)));
    assert_eq!(price.sample_values[0], CellValue::from("1.5"));
}

#[test]
fn test_categorical_tie_keeps_first_seen() {
    let file = create_test_file("color\nred\nred\nblue\nblue\n");

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let color = &result.analysis.columns[0];

    assert_eq!(color.column_type, ColumnType::Categorical);
    assert_eq!(color.max, Some(CellValue::from("red")));
    assert_eq!(color.min, Some(CellValue::from("blue")));
}

// =============================================================================
// Health
// =============================================================================

#[test]
fn test_outlier_union_from_file() {
    let a = [10, 11, 12, 100, 13, 14, 15, 16, 17, 18];
    let b = [5, 5, 6, 6, 7, 7, 6, -50, 5, 6];
    let mut content = String::from("a,b\n");
    for i in 0..10 {
        content.push_str(&format!("{},{}\n", a[i], b[i]));
    }
    let file = create_test_file(&content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let health = result.analysis.health;

    assert_eq!(result.analysis.outlier_columns, vec!["a", "b"]);
    assert_eq!(health.completeness, 100);
    assert_eq!(health.consistency, 80);
    assert_eq!(health.diversity, 70);
    assert_eq!(health.score, 87);
}

#[test]
fn test_text_only_table_uses_default_consistency() {
    let file = create_test_file("city,team\nOslo,red\nRome,blue\nLima,red\nKyiv,\n");

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let health = result.analysis.health;

    assert_eq!(health.consistency, 85);
    assert!(result.analysis.outlier_columns.is_empty());
    // 1 null out of 8 cells
    assert_eq!(health.completeness, 88);
}

// =============================================================================
// Payload
// =============================================================================

#[test]
fn test_payload_from_file() {
    let mut content = String::from("region,sales\n");
    for i in 0..40 {
        content.push_str(&format!("{},{}\n", ["north", "south"][i % 2], 100 + i));
    }
    let file = create_test_file(&content);

    let result = Tabsight::new().analyze(file.path()).expect("Analysis failed");
    let payload = InsightsPayload::from_result(&result).with_selected_columns(["sales"]);

    assert_eq!(payload.filename, result.source.file);
    assert_eq!(payload.row_count, 40);
    assert_eq!(payload.sample_rows.len(), 10);
    assert_eq!(payload.selected_columns, vec!["sales"]);

    let json: serde_json::Value =
        serde_json::from_str(&payload.to_json().expect("serialize")).expect("valid json");
    assert_eq!(json["columnCount"], 2);
    assert_eq!(json["selectedColumns"][0], "sales");
    assert_eq!(json["columns"][1]["type"], "id");
}
