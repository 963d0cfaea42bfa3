//! CSV Data Loader Module
//! Handles CSV file loading and column extraction using Polars.

use crate::data::column::{is_numeric_dtype, Column, ColumnError};
use log::{debug, info};
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    #[error(transparent)]
    ColumnError(#[from] ColumnError),
}

/// Handles CSV file loading with Polars for high performance.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file using Polars.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&DataFrame, LoaderError> {
        self.file_path = Some(PathBuf::from(file_path));

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(
            "loaded {} with {} rows, {} columns",
            file_path,
            df.height(),
            df.width()
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of numeric column names.
    pub fn get_numeric_columns(&self) -> Vec<String> {
        let Some(df) = &self.df else {
            return Vec::new();
        };

        numeric_column_names(df)
    }

    /// Extract a named column as an in-memory numeric `Column`.
    pub fn extract_column(&self, name: &str) -> Result<Column, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        let series = df
            .column(name)
            .map_err(|_| LoaderError::UnknownColumn(name.to_string()))?
            .as_materialized_series();

        debug!("extracted column '{name}' ({} entries)", series.len());
        Ok(Column::from_series(series)?)
    }

    /// Write a cleaned column back over the attribute it came from.
    pub fn replace_column(&mut self, column: &Column) -> Result<(), LoaderError> {
        let df = self.df.as_mut().ok_or(LoaderError::NoData)?;
        df.replace(column.name(), column.to_series())?;
        Ok(())
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

/// Numeric column names of a DataFrame, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Per-column null counts, sorted by count descending.
pub fn missing_value_counts(df: &DataFrame) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = df
        .get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
