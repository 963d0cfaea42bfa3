//! Imputer Module
//! Mean imputation of missing entries.

use crate::data::Column;
use crate::stats::StatsCalculator;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ImputeError {
    #[error("Column '{0}' has no present values, mean is undefined")]
    EmptyColumn(String),
}

/// Fills missing entries with the column mean.
pub struct Imputer;

impl Imputer {
    /// Produce a new column with every missing entry replaced by the mean
    /// of the present values.
    ///
    /// The mean is taken over the raw column, outliers included. Present
    /// values are copied unchanged and the input column is not mutated;
    /// a column with zero present values has no defined mean and errors.
    pub fn impute_missing(column: &Column) -> Result<Column, ImputeError> {
        let present = column.present();
        if present.is_empty() {
            return Err(ImputeError::EmptyColumn(column.name().to_string()));
        }

        let mean = StatsCalculator::mean(&present);
        let values = column
            .values()
            .iter()
            .map(|v| Some(v.unwrap_or(mean)))
            .collect();

        Ok(Column::new(column.name(), values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_missing_with_raw_mean() {
        let column = Column::new(
            "age",
            vec![
                Some(10.0),
                Some(12.0),
                Some(12.0),
                Some(13.0),
                Some(12.0),
                Some(11.0),
                Some(14.0),
                Some(13.0),
                Some(100.0),
                None,
            ],
        );

        let imputed = Imputer::impute_missing(&column).unwrap();

        // (10+12+12+13+12+11+14+13+100)/9 = 23.0, outlier included
        assert_eq!(imputed.values()[9], Some(23.0));
        assert_eq!(&imputed.values()[..9], &column.values()[..9]);
        // input untouched, missing marker still observable
        assert_eq!(column.values()[9], None);
    }

    #[test]
    fn single_present_value_fills_all_gaps() {
        let column = Column::new("sparse", vec![Some(5.0), None, None]);
        let imputed = Imputer::impute_missing(&column).unwrap();
        assert_eq!(imputed.values(), &[Some(5.0), Some(5.0), Some(5.0)]);
    }

    #[test]
    fn fully_present_column_is_returned_identical() {
        let column = Column::new("full", vec![Some(1.0), Some(2.0), Some(3.0)]);
        let once = Imputer::impute_missing(&column).unwrap();
        assert_eq!(once, column);

        // idempotent once no missing entries remain
        let twice = Imputer::impute_missing(&once).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn repeated_imputation_keeps_present_values() {
        let column = Column::new("x", vec![Some(2.0), None, Some(4.0)]);
        let once = Imputer::impute_missing(&column).unwrap();
        let twice = Imputer::impute_missing(&once).unwrap();
        assert_eq!(twice, once);
        assert_eq!(once.values()[0], Some(2.0));
        assert_eq!(once.values()[2], Some(4.0));
    }

    #[test]
    fn all_missing_column_errors() {
        let column = Column::new("void", vec![None, None, None]);
        assert_eq!(
            Imputer::impute_missing(&column),
            Err(ImputeError::EmptyColumn("void".to_string()))
        );
    }
}
