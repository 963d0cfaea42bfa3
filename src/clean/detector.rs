//! Outlier Detector Module
//! Quartile-fence (IQR) classification of a column's present values.

use crate::data::Column;
use crate::stats::StatsCalculator;
use serde::{Deserialize, Serialize};

/// Fence scaling applied to the interquartile range.
pub const FENCE_MULTIPLIER: f64 = 1.5;

/// Lower/upper thresholds beyond which values count as outliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FencePair {
    pub lower: f64,
    pub upper: f64,
}

/// A present value classified as an outlier, with its original position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub index: usize,
    pub value: f64,
}

/// Classifies outliers using the boxplot method.
pub struct OutlierDetector;

impl OutlierDetector {
    /// Compute quartile fences over the column's present values.
    ///
    /// With fewer than 2 present values Q1 = Q3 = the single value (NaN
    /// when none exist), so IQR = 0 and both fences collapse onto it.
    pub fn compute_fences(column: &Column) -> FencePair {
        let mut present = column.present();
        present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let q1 = StatsCalculator::quantile(&present, 0.25);
        let q3 = StatsCalculator::quantile(&present, 0.75);
        let iqr = q3 - q1;

        FencePair {
            lower: q1 - FENCE_MULTIPLIER * iqr,
            upper: q3 + FENCE_MULTIPLIER * iqr,
        }
    }

    /// Every present value strictly outside the fences, in column order.
    ///
    /// Missing entries are never flagged; an empty result is a valid one.
    pub fn find_outliers(column: &Column, fences: &FencePair) -> Vec<Outlier> {
        column
            .values()
            .iter()
            .enumerate()
            .filter_map(|(index, v)| {
                let value = (*v)?;
                if value < fences.lower || value > fences.upper {
                    Some(Outlier { index, value })
                } else {
                    None
                }
            })
            .collect()
    }
}
