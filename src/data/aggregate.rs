//! Aggregation Module
//! Groups table rows by a category column and reduces each group to a
//! count or a sum.

use crate::data::Table;
use polars::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Column '{0}' is not numeric. Choose a numeric column for values.")]
    NonNumericColumn(String),
    #[error("No data available to aggregate for the selected columns.")]
    EmptyAggregate,
}

/// Category label for a cell. String cells are taken verbatim; other
/// dtypes go through their display form (which carries no quoting).
fn label_of(value: &AnyValue) -> String {
    match value {
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Count the rows in each distinct value of `category`.
///
/// Null category values are skipped. Entries come back ordered by label;
/// the bar renderer re-sorts by value.
pub fn count_by_category(
    table: &Table,
    category: &str,
) -> Result<Vec<(String, f64)>, AggregateError> {
    let groups = table.data().column(category)?;

    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for i in 0..table.height() {
        if let Ok(g) = groups.get(i) {
            if !g.is_null() {
                *counts.entry(label_of(&g)).or_insert(0.0) += 1.0;
            }
        }
    }

    if counts.is_empty() {
        return Err(AggregateError::EmptyAggregate);
    }
    Ok(counts.into_iter().collect())
}

/// Sum the numeric column `value_col` within each distinct value of
/// `category`.
///
/// Fails with [`AggregateError::NonNumericColumn`] before touching any
/// rows when `value_col` did not parse as numeric. Rows with a null
/// category or a missing value are skipped.
pub fn sum_by_category(
    table: &Table,
    category: &str,
    value_col: &str,
) -> Result<Vec<(String, f64)>, AggregateError> {
    if !table.is_numeric(value_col) {
        return Err(AggregateError::NonNumericColumn(value_col.to_string()));
    }

    let groups = table.data().column(category)?;
    let values = table.data().column(value_col)?.cast(&DataType::Float64)?;
    let values = values.f64()?;

    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for i in 0..table.height() {
        if let (Ok(g), Some(v)) = (groups.get(i), values.get(i)) {
            if !g.is_null() && !v.is_nan() {
                *sums.entry(label_of(&g)).or_insert(0.0) += v;
            }
        }
    }

    if sums.is_empty() {
        return Err(AggregateError::EmptyAggregate);
    }
    Ok(sums.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sales() -> Table {
        Table::load(Path::new("tests/data/sales.csv")).unwrap()
    }

    #[test]
    fn count_groups_rows_per_category() {
        let table = sales();
        let counts = count_by_category(&table, "category").unwrap();
        assert_eq!(
            counts,
            vec![("A".to_string(), 2.0), ("B".to_string(), 1.0)]
        );

        // Group sizes add up to the row count
        let total: f64 = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, table.height() as f64);
    }

    #[test]
    fn sum_totals_each_category() {
        let table = sales();
        let sums = sum_by_category(&table, "category", "amount").unwrap();
        assert_eq!(
            sums,
            vec![("A".to_string(), 13.0), ("B".to_string(), 5.0)]
        );

        // Group totals add up to the full column total
        let total: f64 = sums.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 18.0);
    }

    #[test]
    fn sum_rejects_text_value_column() {
        let table = sales();
        let err = sum_by_category(&table, "category", "category").unwrap_err();
        match err {
            AggregateError::NonNumericColumn(name) => assert_eq!(name, "category"),
            other => panic!("expected NonNumericColumn, got {other:?}"),
        }
    }

    #[test]
    fn quoted_labels_are_kept_verbatim() {
        // Category values whose data contains quote characters must not
        // lose them in the aggregate keys
        let table = Table::load(Path::new("tests/data/quoted_category.csv")).unwrap();
        let counts = count_by_category(&table, "category").unwrap();
        assert_eq!(
            counts,
            vec![("\"A\"".to_string(), 2.0), ("B".to_string(), 1.0)]
        );

        let sums = sum_by_category(&table, "category", "amount").unwrap();
        assert_eq!(
            sums,
            vec![("\"A\"".to_string(), 3.0), ("B".to_string(), 3.0)]
        );
    }

    #[test]
    fn all_null_category_is_empty_aggregate() {
        let table = Table::load(Path::new("tests/data/blank_category.csv")).unwrap();
        let err = count_by_category(&table, "category").unwrap_err();
        assert!(matches!(err, AggregateError::EmptyAggregate));
    }
}
