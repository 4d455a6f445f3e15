//! atlas-scaling: preprocessing of source tasks for meta-learning optimizers.
//!
//! Source tasks are previous optimization runs, each a pair of row-aligned
//! `params` and `values` matrices. This crate flips objective signs across a
//! task collection and scales params and values per feature column with
//! standardization, normalization or identity. Statistics are fitted once on
//! the whole collection and then reused to transform, and inverse transform,
//! new samples such as fresh observations or optimizer proposals.
pub mod config;
pub mod error;
pub mod preprocessing;
pub mod stats;
pub mod task;
pub mod transforms;

pub use config::{DataKind, Direction, ScalerConfig, ScalingType};
pub use error::{Result, ScalingError};
pub use preprocessing::{FittedScaler, Scaler};
pub use stats::ColumnStats;
pub use task::{flip_source_tasks, Task};
