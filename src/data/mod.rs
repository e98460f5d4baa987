//! Data module - CSV loading and aggregation

mod aggregate;
mod loader;

pub use aggregate::{count_by_category, sum_by_category, AggregateError};
pub use loader::{ColumnKind, LoaderError, Table};
