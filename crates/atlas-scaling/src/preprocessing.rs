//! Scaler for source-task params and values.
//!
//! A `Scaler` only knows which scaling mode to use for each field. Fitting it
//! on a task collection consumes it and yields a `FittedScaler`, which owns the
//! per-column statistics and is the only type that can transform samples. A
//! scaler therefore cannot be used before it is fit, and cannot be refit.

use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Ix2};
use serde::{Deserialize, Serialize};

use crate::config::{DataKind, Direction, ScalerConfig, ScalingType};
use crate::error::{Result, ScalingError};
use crate::stats::ColumnStats;
use crate::task::{concatenate_field, Task};

/// Unfitted scaler holding the scaling mode for params and values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scaler {
    config: ScalerConfig,
}

impl Scaler {
    /// Create a scaler from mode names.
    ///
    /// Fails with `UnsupportedScalingType` if either name is not one of
    /// `standardization`, `normalization` or `identity`.
    pub fn new(param_type: &str, value_type: &str) -> Result<Self> {
        Ok(Self::from_types(param_type.parse()?, value_type.parse()?))
    }

    pub fn from_types(param_type: ScalingType, value_type: ScalingType) -> Self {
        Scaler {
            config: ScalerConfig::new(param_type, value_type),
        }
    }

    pub fn from_config(config: &ScalerConfig) -> Self {
        Scaler { config: *config }
    }

    pub fn param_type(&self) -> ScalingType {
        self.config.param_type
    }

    pub fn value_type(&self) -> ScalingType {
        self.config.value_type
    }

    /// Compute params and values statistics over every row of every task.
    pub fn fit(self, tasks: &[Task]) -> Result<FittedScaler> {
        for task in tasks {
            if task.params.nrows() != task.values.nrows() {
                return Err(ScalingError::RowMismatch {
                    params_rows: task.params.nrows(),
                    values_rows: task.values.nrows(),
                });
            }
        }

        let all_params = concatenate_field(tasks, DataKind::Params)?;
        let all_values = concatenate_field(tasks, DataKind::Values)?;

        let param_stats = ColumnStats::fit(self.config.param_type, all_params.view())?;
        let value_stats = ColumnStats::fit(self.config.value_type, all_values.view())?;

        log::debug!(
            "Fitted scaler on {} tasks ({} samples): params {} x{}, values {} x{}",
            tasks.len(),
            all_params.nrows(),
            self.config.param_type,
            all_params.ncols(),
            self.config.value_type,
            all_values.ncols()
        );

        Ok(FittedScaler {
            config: self.config,
            param_stats,
            value_stats,
        })
    }

    /// Fit on `tasks` and return the fitted scaler along with the tasks
    /// forward-transformed under it, in input order.
    pub fn fit_transform_tasks(self, tasks: &[Task]) -> Result<(FittedScaler, Vec<Task>)> {
        let fitted = self.fit(tasks)?;
        let transformed = fitted.transform_tasks(tasks)?;
        Ok((fitted, transformed))
    }
}

/// Scaler with statistics fitted on a source-task collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedScaler {
    config: ScalerConfig,
    param_stats: ColumnStats,
    value_stats: ColumnStats,
}

impl FittedScaler {
    pub fn param_type(&self) -> ScalingType {
        self.config.param_type
    }

    pub fn value_type(&self) -> ScalingType {
        self.config.value_type
    }

    pub fn param_stats(&self) -> &ColumnStats {
        &self.param_stats
    }

    pub fn value_stats(&self) -> &ColumnStats {
        &self.value_stats
    }

    pub fn stats(&self, kind: DataKind) -> &ColumnStats {
        match kind {
            DataKind::Params => &self.param_stats,
            DataKind::Values => &self.value_stats,
        }
    }

    /// Map a raw sample into scaled space.
    ///
    /// `sample` must be two-dimensional with the fitted number of columns for
    /// `kind`; anything else is rejected rather than reshaped.
    pub fn transform<S, D>(&self, sample: &ArrayBase<S, D>, kind: DataKind) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.apply(sample, kind, Direction::Forward)
    }

    /// Map a scaled sample back into raw data space.
    ///
    /// This is the exact inverse of [`FittedScaler::transform`] for every
    /// scaling mode.
    pub fn inverse_transform<S, D>(
        &self,
        sample: &ArrayBase<S, D>,
        kind: DataKind,
    ) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.apply(sample, kind, Direction::Reverse)
    }

    /// Forward-transform params and values of each task. One output per input task.
    pub fn transform_tasks(&self, tasks: &[Task]) -> Result<Vec<Task>> {
        self.map_tasks(tasks, Direction::Forward)
    }

    /// Reverse of [`FittedScaler::transform_tasks`].
    pub fn inverse_transform_tasks(&self, tasks: &[Task]) -> Result<Vec<Task>> {
        self.map_tasks(tasks, Direction::Reverse)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a fitted scaler, checking the statistics agree with the modes.
    pub fn from_json(json: &str) -> Result<Self> {
        let fitted: FittedScaler = serde_json::from_str(json)?;
        for (kind, declared, stats) in [
            (DataKind::Params, fitted.config.param_type, &fitted.param_stats),
            (DataKind::Values, fitted.config.value_type, &fitted.value_stats),
        ] {
            if stats.scaling_type() != declared {
                return Err(ScalingError::InvalidParameter(format!(
                    "{} declared as {} but carries {} statistics",
                    kind,
                    declared,
                    stats.scaling_type()
                )));
            }
            stats.validate()?;
        }
        Ok(fitted)
    }

    fn apply<S, D>(
        &self,
        sample: &ArrayBase<S, D>,
        kind: DataKind,
        direction: Direction,
    ) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let sample = as_matrix(sample)?;
        let stats = self.stats(kind);
        stats.check_features(kind, sample.ncols())?;
        Ok(stats.apply(sample, direction))
    }

    fn map_tasks(&self, tasks: &[Task], direction: Direction) -> Result<Vec<Task>> {
        tasks
            .iter()
            .map(|task| -> Result<Task> {
                Ok(Task {
                    params: self.apply(&task.params, DataKind::Params, direction)?,
                    values: self.apply(&task.values, DataKind::Values, direction)?,
                })
            })
            .collect()
    }
}

fn as_matrix<S, D>(sample: &ArrayBase<S, D>) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if sample.ndim() != 2 {
        return Err(ScalingError::InvalidShape {
            expected: "2D array".to_string(),
            got: format!("{}D array with shape {:?}", sample.ndim(), sample.shape()),
        });
    }
    Ok(sample.view().into_dimensionality::<Ix2>()?)
}
