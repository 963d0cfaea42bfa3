//! Numeric Column Module
//! In-memory representation of one numeric attribute with missing entries.

use polars::prelude::{DataType, NamedFrom, Series};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] polars::prelude::PolarsError),
    #[error("Column '{0}' is not numeric")]
    NonNumeric(String),
}

/// Check whether a dtype can be cleaned as a numeric column.
pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
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

/// An ordered sequence of optional numeric values.
///
/// `Some(v)` is a present value, `None` a missing entry. Cleaning
/// operations never mutate a `Column`; they return a new one, so the
/// original missing markers stay observable to prior holders.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Extract a column from a polars Series.
    ///
    /// Any numeric dtype is cast to Float64. Nulls and NaN payloads both
    /// map to missing, matching the CSV loader's null semantics.
    pub fn from_series(series: &Series) -> Result<Self, ColumnError> {
        if !is_numeric_dtype(series.dtype()) {
            return Err(ColumnError::NonNumeric(series.name().to_string()));
        }

        let casted = series.cast(&DataType::Float64)?;
        let ca = casted.f64()?;
        let values = ca
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();

        Ok(Self {
            name: series.name().to_string(),
            values,
        })
    }

    /// Convert back to a polars Series, preserving missing entries as nulls.
    pub fn to_series(&self) -> Series {
        Series::new(self.name.as_str().into(), self.values.as_slice())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries, missing markers included.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Present values in original order, missing entries skipped.
    pub fn present(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| *v).collect()
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}
