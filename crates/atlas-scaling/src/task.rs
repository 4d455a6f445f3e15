//! Source tasks and helpers that operate on whole task collections.
//!
//! A source task is one previously run optimization: the parameter settings
//! that were tried (`params`) and the objective measurements they produced
//! (`values`). Both are row-aligned 2D arrays.

use ndarray::{concatenate, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::config::DataKind;
use crate::error::{Result, ScalingError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Parameter settings, one row per sample
    pub params: Array2<f64>,
    /// Objective measurements, one row per sample
    pub values: Array2<f64>,
}

impl Task {
    /// Build a task, checking that params and values are row-aligned.
    pub fn new(params: Array2<f64>, values: Array2<f64>) -> Result<Self> {
        if params.nrows() != values.nrows() {
            return Err(ScalingError::RowMismatch {
                params_rows: params.nrows(),
                values_rows: values.nrows(),
            });
        }
        Ok(Task { params, values })
    }

    pub fn n_samples(&self) -> usize {
        self.params.nrows()
    }

    pub fn field(&self, kind: DataKind) -> ArrayView2<'_, f64> {
        match kind {
            DataKind::Params => self.params.view(),
            DataKind::Values => self.values.view(),
        }
    }

    /// Copy of this task with the sign of every value flipped.
    pub fn flipped(&self) -> Task {
        Task {
            params: self.params.clone(),
            values: self.values.mapv(|v| -v),
        }
    }
}

/// Flip the sign of every task's values, turning a maximization objective
/// into a minimization one (or back). Params are passed through untouched.
pub fn flip_source_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().map(Task::flipped).collect()
}

/// Stack one field of every task along the sample axis.
///
/// All tasks must agree on the column count of that field.
pub(crate) fn concatenate_field(tasks: &[Task], kind: DataKind) -> Result<Array2<f64>> {
    let first = tasks.first().ok_or_else(|| {
        ScalingError::EmptyData(format!("cannot stack {} of an empty task collection", kind))
    })?;

    let ncols = first.field(kind).ncols();
    let mut views = Vec::with_capacity(tasks.len());
    for task in tasks {
        let view = task.field(kind);
        if view.ncols() != ncols {
            return Err(ScalingError::FeatureMismatch {
                kind,
                expected: ncols,
                got: view.ncols(),
            });
        }
        views.push(view);
    }

    Ok(concatenate(Axis(0), &views)?)
}
