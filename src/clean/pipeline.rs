//! Cleaning Pipeline Module
//! Whole-table cleaning: summaries, fences, outliers, imputation, report.

use crate::clean::detector::{FencePair, Outlier, OutlierDetector};
use crate::clean::imputer::{ImputeError, Imputer};
use crate::data::{numeric_column_names, Column, ColumnError};
use crate::stats::{ColumnSummary, StatsCalculator};
use log::{debug, warn};
use polars::prelude::{DataFrame, PolarsError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error(transparent)]
    ColumnError(#[from] ColumnError),
    #[error(transparent)]
    ImputeError(#[from] ImputeError),
}

/// Cleaning record for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    pub summary: ColumnSummary,
    pub missing_count: usize,
    pub fences: FencePair,
    pub outliers: Vec<Outlier>,
    pub imputed_count: usize,
}

/// Cleaning records for every numeric column of a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

impl QualityReport {
    /// Render the report as pretty JSON for downstream consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the fence/outlier/imputation pass over columns and tables.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a single column: summary, fences, outliers, imputed copy.
    ///
    /// Errors when the column has no present values; the caller decides
    /// whether an unimputable column is fatal.
    pub fn clean_column(column: &Column) -> Result<(Column, ColumnReport), ImputeError> {
        let fences = OutlierDetector::compute_fences(column);
        let outliers = OutlierDetector::find_outliers(column, &fences);
        let imputed = Imputer::impute_missing(column)?;

        debug!(
            "cleaned '{}': {} outliers, {} imputed",
            column.name(),
            outliers.len(),
            column.missing_count()
        );

        let report = ColumnReport {
            name: column.name().to_string(),
            summary: StatsCalculator::compute_summary(&column.present()),
            missing_count: column.missing_count(),
            fences,
            outliers,
            imputed_count: column.missing_count(),
        };

        Ok((imputed, report))
    }

    /// Clean every numeric column of a DataFrame in parallel.
    ///
    /// Returns a new frame with imputed columns swapped in, plus the
    /// per-column reports in frame order. A column with zero present
    /// values cannot be imputed; it is reported and left untouched.
    pub fn clean_all_numeric(df: &DataFrame) -> Result<(DataFrame, QualityReport), CleanError> {
        let names = numeric_column_names(df);

        let results: Vec<(Option<Column>, ColumnReport)> = names
            .par_iter()
            .map(|name| {
                let series = df.column(name.as_str())?.as_materialized_series();
                let column = Column::from_series(series)?;

                match Self::clean_column(&column) {
                    Ok((imputed, report)) => Ok((Some(imputed), report)),
                    Err(ImputeError::EmptyColumn(_)) => {
                        warn!("column '{name}' has no present values, left untouched");
                        let fences = OutlierDetector::compute_fences(&column);
                        Ok((
                            None,
                            ColumnReport {
                                name: column.name().to_string(),
                                summary: ColumnSummary::default(),
                                missing_count: column.missing_count(),
                                fences,
                                outliers: Vec::new(),
                                imputed_count: 0,
                            },
                        ))
                    }
                }
            })
            .collect::<Result<_, CleanError>>()?;

        let mut cleaned = df.clone();
        let mut columns = Vec::with_capacity(results.len());
        for (imputed, report) in results {
            if let Some(imputed) = imputed {
                cleaned.replace(&report.name, imputed.to_series())?;
            }
            columns.push(report);
        }

        Ok((
            cleaned,
            QualityReport {
                rows: df.height(),
                columns,
            },
        ))
    }
}
