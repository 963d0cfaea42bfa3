//! Tabclean - CSV Column Cleaning & Quality Reporting
//!
//! A Rust library for detecting quartile-fence outliers and imputing
//! missing values in the numeric columns of tabular data.

pub mod clean;
pub mod data;
pub mod stats;

pub use clean::{
    CleanError, ColumnReport, DataCleaner, FencePair, ImputeError, Imputer, Outlier,
    OutlierDetector, QualityReport, FENCE_MULTIPLIER,
};
pub use data::{
    missing_value_counts, numeric_column_names, Column, ColumnError, DataLoader, LoaderError,
};
pub use stats::{ColumnSummary, StatsCalculator};
