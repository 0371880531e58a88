//! Heuristic column classification.
//!
//! Checks run in a fixed priority order and the first match wins:
//! identifier, numeric, date, categorical, then unknown.

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::dates;
use crate::input::CellValue;
use crate::schema::{ColumnMeta, ColumnType};

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

/// All-digit keys or lowercase hex/UUID-like keys of at least 8 characters.
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+|[0-9a-f-]{8,})$").expect("valid identifier pattern"));

/// Thresholds for column classification.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Non-null count that must be exceeded before a column can be an identifier.
    pub id_min_samples: usize,
    /// Fraction of numeric values that must be exceeded for `Numeric`.
    pub numeric_ratio: f64,
    /// Fraction of date values that must be exceeded for `Date`.
    pub date_ratio: f64,
    /// Text length that must be exceeded for a value to count as a date.
    pub date_min_length: usize,
    /// Unique/non-null ratio below which a column is categorical.
    pub categorical_unique_ratio: f64,
    /// Unique count at or below which a column is categorical.
    pub categorical_max_unique: usize,
    /// Number of sample values kept per column.
    pub sample_size: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            id_min_samples: 10,
            numeric_ratio: 0.85,
            date_ratio: 0.75,
            date_min_length: 4,
            categorical_unique_ratio: 0.5,
            categorical_max_unique: 20,
            sample_size: 5,
        }
    }
}

/// Non-null view of a column shared by type inference and statistics.
struct ColumnProfile<'a> {
    row_count: usize,
    non_null: Vec<&'a CellValue>,
    /// Frequency of each string form, in first-encountered order.
    value_counts: IndexMap<Cow<'a, str>, usize>,
}

impl<'a> ColumnProfile<'a> {
    fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut row_count = 0;
        let mut non_null = Vec::new();
        let mut value_counts: IndexMap<Cow<'a, str>, usize> = IndexMap::new();

        for value in values {
            row_count += 1;
            if value.is_null() {
                continue;
            }
            *value_counts.entry(value.as_text()).or_insert(0) += 1;
            non_null.push(value);
        }

        Self {
            row_count,
            non_null,
            value_counts,
        }
    }

    fn unique_count(&self) -> usize {
        self.value_counts.len()
    }

    fn ratio(&self, count: usize) -> f64 {
        count as f64 / self.non_null.len() as f64
    }
}

/// Assigns a [`ColumnType`] and summary statistics to a column of raw values.
///
/// Classification is a pure function of the value sequence.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    config: ClassifierConfig,
}

impl ColumnClassifier {
    /// Create a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom thresholds.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify an unnamed column.
    pub fn classify(&self, values: &[CellValue]) -> ColumnMeta {
        self.classify_column("", values)
    }

    /// Classify a named column from any sequence of cells.
    pub fn classify_column<'a, I>(&self, name: &str, values: I) -> ColumnMeta
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let profile = ColumnProfile::build(values);
        let column_type = self.decide(&profile);

        let mut meta = ColumnMeta {
            name: name.to_string(),
            column_type,
            null_count: profile.row_count - profile.non_null.len(),
            unique_count: profile.unique_count(),
            sample_values: profile
                .non_null
                .iter()
                .take(self.config.sample_size)
                .map(|v| (*v).clone())
                .collect(),
            ..ColumnMeta::default()
        };

        match column_type {
            ColumnType::Numeric => numeric_stats(&profile, &mut meta),
            ColumnType::Date => date_stats(&profile, &mut meta),
            ColumnType::Categorical => categorical_stats(&profile, &mut meta),
            ColumnType::Id | ColumnType::Unknown => {}
        }

        debug!(
            column = name,
            column_type = %column_type,
            rows = profile.row_count,
            nulls = meta.null_count,
            unique = meta.unique_count,
            "classified column"
        );

        meta
    }

    /// Infer only the type of a column.
    pub fn infer_type(&self, values: &[CellValue]) -> ColumnType {
        self.decide(&ColumnProfile::build(values))
    }

    fn decide(&self, profile: &ColumnProfile<'_>) -> ColumnType {
        let total = profile.non_null.len();
        if total == 0 {
            return ColumnType::Unknown;
        }

        let unique = profile.unique_count();

        if unique == total
            && total > self.config.id_min_samples
            && profile.value_counts.keys().all(|v| ID_PATTERN.is_match(v))
        {
            return ColumnType::Id;
        }

        let numeric = profile.non_null.iter().filter(|v| v.is_numeric()).count();
        if profile.ratio(numeric) > self.config.numeric_ratio {
            return ColumnType::Numeric;
        }

        let date_like = profile
            .non_null
            .iter()
            .filter(|v| self.is_date_candidate(v))
            .count();
        if profile.ratio(date_like) > self.config.date_ratio {
            return ColumnType::Date;
        }

        if profile.ratio(unique) < self.config.categorical_unique_ratio
            || unique <= self.config.categorical_max_unique
        {
            return ColumnType::Categorical;
        }

        ColumnType::Unknown
    }

    /// Text longer than the minimum that parses as a date. Numbers never qualify.
    fn is_date_candidate(&self, value: &CellValue) -> bool {
        match value.as_str() {
            Some(text) => {
                text.chars().count() > self.config.date_min_length && dates::is_date(text)
            }
            None => false,
        }
    }
}

// =============================================================================
// STATISTICS BY TYPE
// =============================================================================

fn numeric_stats(profile: &ColumnProfile<'_>, meta: &mut ColumnMeta) {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for n in profile.non_null.iter().filter_map(|v| v.as_number()) {
        count += 1;
        sum += n;
        min = min.min(n);
        max = max.max(n);
    }

    if count == 0 {
        return;
    }

    meta.min = Some(CellValue::Number(min));
    meta.max = Some(CellValue::Number(max));
    meta.mean = Some(round_to(sum / count as f64, 4));
}

/// Only values the date parser accepts take part. Bare years such as
/// `"2024"` and month-year text such as `"Jan 2024"` are not dates and are
/// left out of the range.
fn date_stats(profile: &ColumnProfile<'_>, meta: &mut ColumnMeta) {
    let mut parsed: Vec<&str> = profile
        .non_null
        .iter()
        .filter_map(|v| v.as_str())
        .filter(|s| dates::is_date(s))
        .collect();
    parsed.sort_unstable();

    meta.min = parsed.first().map(|s| CellValue::from(*s));
    meta.max = parsed.last().map(|s| CellValue::from(*s));
}

/// Most frequent label becomes `max`, least frequent `min`; ties keep
/// first-encountered order.
fn categorical_stats(profile: &ColumnProfile<'_>, meta: &mut ColumnMeta) {
    let mut frequencies: Vec<(&Cow<'_, str>, &usize)> = profile.value_counts.iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(a.1));

    meta.max = frequencies
        .first()
        .map(|(label, _)| CellValue::from(label.to_string()));
    meta.min = frequencies
        .last()
        .map(|(label, _)| CellValue::from(label.to_string()));
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    #[test]
    fn test_all_null_is_unknown() {
        let values = vec![CellValue::Null, CellValue::from(""), CellValue::Null];
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Unknown);
        assert_eq!(meta.null_count, 3);
        assert_eq!(meta.unique_count, 0);
        assert!(meta.min.is_none() && meta.max.is_none() && meta.mean.is_none());
        assert!(meta.sample_values.is_empty());
    }

    #[test]
    fn test_empty_column_is_unknown() {
        let meta = ColumnClassifier::new().classify(&[]);
        assert_eq!(meta.column_type, ColumnType::Unknown);
        assert_eq!(meta.null_count, 0);
    }

    #[test]
    fn test_digit_keys_are_identifiers_before_numeric() {
        let values: Vec<CellValue> = (1..=15).map(|i| CellValue::from(i.to_string())).collect();
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Id);
        assert!(meta.min.is_none());
        assert!(meta.mean.is_none());
    }

    #[test]
    fn test_identifier_threshold_is_exclusive() {
        let ten: Vec<CellValue> = (1..=10).map(CellValue::from).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&ten), ColumnType::Numeric);

        let eleven: Vec<CellValue> = (1..=11).map(CellValue::from).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&eleven), ColumnType::Id);
    }

    #[test]
    fn test_uuid_keys_are_identifiers() {
        let values: Vec<CellValue> = (0..12)
            .map(|i| CellValue::from(format!("3f2a9c4e-1b7d-4e8a-9c1f-{:012x}", i)))
            .collect();
        assert_eq!(ColumnClassifier::new().infer_type(&values), ColumnType::Id);
    }

    #[test]
    fn test_uppercase_hex_is_not_identifier() {
        let values: Vec<CellValue> = (0..12)
            .map(|i| CellValue::from(format!("ABCDEF{:04X}", i)))
            .collect();
        assert_ne!(ColumnClassifier::new().infer_type(&values), ColumnType::Id);
    }

    #[test]
    fn test_identifier_threshold_is_configurable() {
        let classifier = ColumnClassifier::with_config(ClassifierConfig {
            id_min_samples: 5,
            ..ClassifierConfig::default()
        });
        let values: Vec<CellValue> = (100..106).map(CellValue::from).collect();
        assert_eq!(classifier.infer_type(&values), ColumnType::Id);
    }

    #[test]
    fn test_numeric_threshold_is_exclusive() {
        let mut above: Vec<CellValue> = (0..86).map(|i| CellValue::from(format!("{}.5", i))).collect();
        above.extend((0..14).map(|i| CellValue::from(format!("junk{}", i))));
        assert_eq!(ColumnClassifier::new().infer_type(&above), ColumnType::Numeric);

        let mut boundary: Vec<CellValue> = (0..85).map(|i| CellValue::from(format!("{}.5", i))).collect();
        boundary.extend((0..15).map(|i| CellValue::from(format!("junk{}", i))));
        assert_ne!(ColumnClassifier::new().infer_type(&boundary), ColumnType::Numeric);
    }

    #[test]
    fn test_numeric_stats_skip_unparseable_values() {
        let mut values = text(&["1.5", " 2.5 ", "4", "3", "2", "1", "9", "8", "7", "6"]);
        values.push(CellValue::from("oops"));
        values.push(CellValue::Null);
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Numeric);
        assert_eq!(meta.min, Some(CellValue::Number(1.0)));
        assert_eq!(meta.max, Some(CellValue::Number(9.0)));
        assert_eq!(meta.mean, Some(4.4));
        assert_eq!(meta.null_count, 1);
    }

    #[test]
    fn test_mean_rounds_to_four_decimals() {
        let values = vec![CellValue::from(1.0), CellValue::from(2.0), CellValue::from(2.0)];
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.mean, Some(1.6667));
    }

    #[test]
    fn test_date_column_stats_are_lexicographic() {
        let values = text(&["2024-03-01", "2023-12-31", "2024-01-15", "2024-02-29"]);
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Date);
        assert_eq!(meta.min, Some(CellValue::from("2023-12-31")));
        assert_eq!(meta.max, Some(CellValue::from("2024-03-01")));
        assert!(meta.mean.is_none());
    }

    #[test]
    fn test_date_threshold_is_exclusive() {
        let three_of_four = text(&["2024-01-01", "2024-02-01", "2024-03-01", "pending"]);
        assert_eq!(
            ColumnClassifier::new().infer_type(&three_of_four),
            ColumnType::Categorical
        );

        let four_of_five = text(&["2024-01-01", "2024-02-01", "2024-03-01", "2024-04-01", "pending"]);
        assert_eq!(ColumnClassifier::new().infer_type(&four_of_five), ColumnType::Date);
    }

    #[test]
    fn test_date_range_skips_bare_years() {
        let values = text(&["2024-01-05", "2024-02-05", "2024-03-05", "2024-04-05", "2023"]);
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Date);
        assert_eq!(meta.min, Some(CellValue::from("2024-01-05")));
        assert_eq!(meta.max, Some(CellValue::from("2024-04-05")));
    }

    #[test]
    fn test_short_values_do_not_count_as_dates() {
        // "2024" parses as a year in some parsers but is too short to count
        let values = text(&["2024", "1999", "abcd", "2024-01-01"]);
        assert_ne!(ColumnClassifier::new().infer_type(&values), ColumnType::Date);
    }

    #[test]
    fn test_categorical_tie_break_keeps_first_seen() {
        let values = text(&["red", "red", "blue", "blue"]);
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Categorical);
        assert_eq!(meta.max, Some(CellValue::from("red")));
        assert_eq!(meta.min, Some(CellValue::from("blue")));
    }

    #[test]
    fn test_categorical_most_and_least_frequent() {
        let values = text(&["b", "a", "a", "c", "a", "b"]);
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.max, Some(CellValue::from("a")));
        assert_eq!(meta.min, Some(CellValue::from("c")));
        assert_eq!(meta.unique_count, 3);
    }

    #[test]
    fn test_categorical_unique_limit_is_inclusive() {
        let twenty: Vec<CellValue> = (0..20).map(|i| CellValue::from(format!("item_{}", i))).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&twenty), ColumnType::Categorical);

        let twenty_one: Vec<CellValue> =
            (0..21).map(|i| CellValue::from(format!("item_{}", i))).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&twenty_one), ColumnType::Unknown);
    }

    #[test]
    fn test_categorical_unique_ratio_is_exclusive() {
        // 25 labels over 60 values
        let repeated: Vec<CellValue> =
            (0..60).map(|i| CellValue::from(format!("item_{}", i % 25))).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&repeated), ColumnType::Categorical);

        // 30 labels over 60 values is exactly half
        let half: Vec<CellValue> =
            (0..60).map(|i| CellValue::from(format!("item_{}", i % 30))).collect();
        assert_eq!(ColumnClassifier::new().infer_type(&half), ColumnType::Unknown);
    }

    #[test]
    fn test_high_cardinality_text_is_unknown() {
        let values: Vec<CellValue> = (0..30)
            .map(|i| CellValue::from(format!("comment number {}", i)))
            .collect();
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.column_type, ColumnType::Unknown);
        assert!(meta.min.is_none());
    }

    #[test]
    fn test_sample_values_keep_order_and_duplicates() {
        let values = vec![
            CellValue::Null,
            CellValue::from("x"),
            CellValue::from("x"),
            CellValue::from(""),
            CellValue::from("y"),
            CellValue::from("z"),
            CellValue::from("x"),
            CellValue::from("w"),
        ];
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.sample_values, text(&["x", "x", "y", "z", "x"]));
        assert_eq!(meta.null_count, 2);
    }

    #[test]
    fn test_numbers_and_numeric_text_share_string_form() {
        let values = vec![CellValue::from(7i64), CellValue::from("7"), CellValue::from(8i64)];
        let meta = ColumnClassifier::new().classify(&values);

        assert_eq!(meta.unique_count, 2);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let values = text(&["a", "b", "", "2024-01-01", "3", "a"]);
        let classifier = ColumnClassifier::new();

        assert_eq!(classifier.classify(&values), classifier.classify(&values));
    }
}
