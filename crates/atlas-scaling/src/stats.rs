use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::config::{DataKind, Direction, ScalingType};
use crate::error::{Result, ScalingError};
use crate::transforms;

/// Per-column statistics fitted for one field of the source tasks.
///
/// Each variant carries exactly what its scaling mode needs, one entry per
/// feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnStats {
    /// Fitted for `ScalingType::Normalization`.
    MinMax { min: Array1<f64>, max: Array1<f64> },
    /// Fitted for `ScalingType::Standardization`. Zero deviations are stored as 1.
    MeanStd { mean: Array1<f64>, std: Array1<f64> },
    Identity,
}

impl ColumnStats {
    /// Compute statistics over all rows of `data`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The scaling mode the statistics are fitted for.
    /// * `data` - Samples stacked along rows, features along columns.
    ///
    /// # Returns
    ///
    /// `MinMax` for normalization, `MeanStd` with population standard
    /// deviation for standardization and `Identity` otherwise. Normalization
    /// and standardization fail with `EmptyData` when `data` has no rows;
    /// identity needs no rows. A NaN in a column makes that column's
    /// statistics NaN in every mode.
    pub fn fit(kind: ScalingType, data: ArrayView2<f64>) -> Result<ColumnStats> {
        if kind == ScalingType::Identity {
            return Ok(ColumnStats::Identity);
        }

        if data.nrows() == 0 {
            return Err(ScalingError::EmptyData(format!(
                "cannot fit {} statistics on zero rows",
                kind
            )));
        }

        let stats = match kind {
            ScalingType::Normalization => {
                let min =
                    data.fold_axis(Axis(0), f64::INFINITY, |&acc, &v| nan_or(acc, v, f64::min));
                let max = data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &v| {
                    nan_or(acc, v, f64::max)
                });

                let constant = constant_columns(min.iter().zip(max.iter()).map(|(a, b)| a == b));
                if !constant.is_empty() {
                    log::warn!(
                        "Columns {:?} have max == min; normalizing them with a unit range",
                        constant
                    );
                }

                ColumnStats::MinMax { min, max }
            }
            ScalingType::Standardization => {
                let mean = data.mean_axis(Axis(0)).ok_or_else(|| {
                    ScalingError::EmptyData("cannot compute mean of zero rows".to_string())
                })?;
                let std = data.std_axis(Axis(0), 0.0);

                let constant = constant_columns(std.iter().map(|&s| s == 0.0));
                if !constant.is_empty() {
                    log::warn!(
                        "Columns {:?} have zero standard deviation; using std = 1",
                        constant
                    );
                }

                let std = std.mapv(|s| if s == 0.0 { 1.0 } else { s });
                ColumnStats::MeanStd { mean, std }
            }
            ScalingType::Identity => ColumnStats::Identity,
        };

        Ok(stats)
    }

    pub fn scaling_type(&self) -> ScalingType {
        match self {
            ColumnStats::MinMax { .. } => ScalingType::Normalization,
            ColumnStats::MeanStd { .. } => ScalingType::Standardization,
            ColumnStats::Identity => ScalingType::Identity,
        }
    }

    /// Number of feature columns the statistics were fitted on. `None` for identity.
    pub fn n_features(&self) -> Option<usize> {
        match self {
            ColumnStats::MinMax { min, .. } => Some(min.len()),
            ColumnStats::MeanStd { mean, .. } => Some(mean.len()),
            ColumnStats::Identity => None,
        }
    }

    /// Check that `ncols` agrees with the fitted feature count.
    pub fn check_features(&self, kind: DataKind, ncols: usize) -> Result<()> {
        match self.n_features() {
            Some(expected) if expected != ncols => Err(ScalingError::FeatureMismatch {
                kind,
                expected,
                got: ncols,
            }),
            _ => Ok(()),
        }
    }

    /// Ensure the paired statistics vectors have equal length.
    pub(crate) fn validate(&self) -> Result<()> {
        let (a, b) = match self {
            ColumnStats::MinMax { min, max } => (min.len(), max.len()),
            ColumnStats::MeanStd { mean, std } => (mean.len(), std.len()),
            ColumnStats::Identity => return Ok(()),
        };
        if a != b {
            return Err(ScalingError::InvalidParameter(format!(
                "{} statistics have mismatched lengths {} and {}",
                self.scaling_type(),
                a,
                b
            )));
        }
        Ok(())
    }

    /// Apply the mode's transform in the given direction.
    ///
    /// Callers are expected to have checked the column count first.
    pub fn apply(&self, x: ArrayView2<f64>, direction: Direction) -> Array2<f64> {
        match self {
            ColumnStats::MinMax { min, max } => {
                transforms::normalize(x, min.view(), max.view(), direction)
            }
            ColumnStats::MeanStd { mean, std } => {
                transforms::standardize(x, mean.view(), std.view(), direction)
            }
            ColumnStats::Identity => transforms::identity(x, direction),
        }
    }
}

/// `f64::min`/`f64::max` skip NaN; statistics must carry it instead.
fn nan_or(acc: f64, v: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        pick(acc, v)
    }
}

fn constant_columns<I>(flags: I) -> Vec<usize>
where
    I: Iterator<Item = bool>,
{
    flags
        .enumerate()
        .filter_map(|(i, is_constant)| is_constant.then_some(i))
        .collect()
}
