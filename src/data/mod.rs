//! Data module - CSV loading and the numeric column model

mod column;
mod loader;

pub use column::{Column, ColumnError};
pub use loader::{missing_value_counts, numeric_column_names, DataLoader, LoaderError};
