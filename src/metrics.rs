use crate::error::{RegressionError, RegressionResult};
use crate::Vector;
use serde::{Deserialize, Serialize};

/// Fit quality of a set of predictions against the true targets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> RegressionResult<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.dot(&diff) / diff.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> RegressionResult<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / diff.len() as f64)
}

/// Coefficient of determination.
///
/// A target with zero variance leaves R² undefined and is reported as
/// `NumericDegeneracy` rather than a NaN or a made-up score.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> RegressionResult<f64> {
    check_lengths(y_true, y_pred)?;

    // Compared exactly: the rounded mean of a constant such as 0.1 leaves a
    // tiny non-zero sum of squares.
    let first = y_true[0];
    if y_true.iter().all(|&y| y == first) {
        return Err(RegressionError::degenerate(
            "R² is undefined for a target with zero variance",
        ));
    }

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    Ok(1.0 - ss_res / ss_tot)
}

pub fn evaluate(y_true: &Vector, y_pred: &Vector) -> RegressionResult<Metrics> {
    Ok(Metrics {
        mse: mean_squared_error(y_true, y_pred)?,
        mae: mean_absolute_error(y_true, y_pred)?,
        r2: r2_score(y_true, y_pred)?,
    })
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> RegressionResult<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::invalid(format!(
            "y_true ({}) and y_pred ({}) must have the same length",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(RegressionError::invalid("metrics need at least one sample"));
    }
    Ok(())
}
