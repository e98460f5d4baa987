//! CSV Table Loader Module
//! Reads a CSV file into an immutable table using Polars.

use polars::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot find file: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("The selected CSV file is empty and cannot be graphed.")]
    EmptyDataset,
}

/// Semantic type of a column, inferred from the parsed dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// A loaded CSV table. Read-only after construction; invariant: at least
/// one data row.
#[derive(Debug)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Load a CSV file using Polars.
    ///
    /// Fails with [`LoaderError::FileNotFound`] when the path does not
    /// exist and [`LoaderError::EmptyDataset`] when the file parses to a
    /// frame with zero rows (e.g. a header-only CSV).
    pub fn load(path: &Path) -> Result<Self, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10_000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        if df.height() == 0 {
            return Err(LoaderError::EmptyDataset);
        }

        Ok(Self { df })
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Whether a column with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Whether the named column parsed as numeric.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.df
            .column(name)
            .map(|col| is_numeric_dtype(col.dtype()))
            .unwrap_or(false)
    }

    /// Names of the numeric columns, in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .filter(|col| is_numeric_dtype(col.dtype()))
            .map(|col| col.name().to_string())
            .collect()
    }

    /// Every column name paired with its inferred kind, in file order.
    pub fn column_kinds(&self) -> Vec<(String, ColumnKind)> {
        self.df
            .get_columns()
            .iter()
            .map(|col| {
                let kind = if is_numeric_dtype(col.dtype()) {
                    ColumnKind::Numeric
                } else {
                    ColumnKind::Text
                };
                (col.name().to_string(), kind)
            })
            .collect()
    }

    /// The underlying DataFrame.
    pub fn data(&self) -> &DataFrame {
        &self.df
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_infers_column_kinds() {
        let table = Table::load(Path::new("tests/data/sales.csv")).unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(
            table.column_kinds(),
            vec![
                ("category".to_string(), ColumnKind::Text),
                ("amount".to_string(), ColumnKind::Numeric),
            ]
        );
        assert_eq!(table.numeric_columns(), vec!["amount"]);
        assert!(table.is_numeric("amount"));
        assert!(!table.is_numeric("category"));
        assert!(table.has_column("category"));
        assert!(!table.has_column("Category"));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = Table::load(Path::new("tests/data/no_such_file.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn header_only_csv_is_empty_dataset() {
        let err = Table::load(Path::new("tests/data/header_only.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyDataset));
    }
}
