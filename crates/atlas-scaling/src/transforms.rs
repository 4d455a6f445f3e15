//! Elementwise scaling formulas.
//!
//! Each primitive takes a 2D array (rows are samples) and per-column
//! statistics broadcast along the rows. Forward and reverse are exact
//! algebraic inverses given the same statistics.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::config::Direction;

/// Pass-through in both directions.
pub fn identity(x: ArrayView2<f64>, _direction: Direction) -> Array2<f64> {
    x.to_owned()
}

/// Forward: `(x - mean) / std`. Reverse: `x * std + mean`.
pub fn standardize(
    x: ArrayView2<f64>,
    mean: ArrayView1<f64>,
    std: ArrayView1<f64>,
    direction: Direction,
) -> Array2<f64> {
    match direction {
        Direction::Forward => (&x - &mean) / &std,
        Direction::Reverse => &x * &std + &mean,
    }
}

/// Forward: `(x - min) / (max - min)`. Reverse: `x * (max - min) + min`.
///
/// A column with `max == min` uses a range of 1 so constant features map to
/// `x - min` instead of dividing by zero.
pub fn normalize(
    x: ArrayView2<f64>,
    min: ArrayView1<f64>,
    max: ArrayView1<f64>,
    direction: Direction,
) -> Array2<f64> {
    let range = guarded_range(min, max);
    match direction {
        Direction::Forward => (&x - &min) / &range,
        Direction::Reverse => &x * &range + &min,
    }
}

fn guarded_range(min: ArrayView1<f64>, max: ArrayView1<f64>) -> Array1<f64> {
    (&max - &min).mapv(|r| if r == 0.0 { 1.0 } else { r })
}
