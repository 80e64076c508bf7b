use crate::dataset::Dataset;
use crate::error::{RegressionError, RegressionResult};
use crate::{Matrix, Vector};
use ndarray::Axis;
use serde::{Deserialize, Serialize};

/// Per-feature mean and population standard deviation.
///
/// Every standard deviation is strictly positive; a constant column is
/// rejected when the parameters are fitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizationParams {
    mean: Vector,
    std: Vector,
}

impl NormalizationParams {
    pub fn fit(data: &Matrix) -> RegressionResult<Self> {
        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| RegressionError::invalid("cannot normalize an empty matrix"))?;
        let std = data.std_axis(Axis(0), 0.0);

        if let Some(index) = std.iter().position(|&s| s == 0.0 || !s.is_finite()) {
            return Err(RegressionError::feature(
                index,
                "zero-variance column cannot be standardized",
            ));
        }

        Ok(Self { mean, std })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &Vector {
        &self.mean
    }

    pub fn std(&self) -> &Vector {
        &self.std
    }

    pub fn transform(&self, data: &Matrix) -> RegressionResult<Matrix> {
        self.check_columns(data.ncols())?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= &self.mean;
            row /= &self.std;
        }

        Ok(result)
    }

    pub fn inverse_transform(&self, data: &Matrix) -> RegressionResult<Matrix> {
        self.check_columns(data.ncols())?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row *= &self.std;
            row += &self.mean;
        }

        Ok(result)
    }

    pub fn transform_row(&self, row: &[f64]) -> RegressionResult<Vector> {
        self.check_columns(row.len())?;

        let raw = Vector::from(row.to_vec());
        Ok((raw - &self.mean) / &self.std)
    }

    /// Maps weights and bias learned on standardized features back onto the
    /// raw feature scale, so `raw_x · w_raw + b_raw` equals the normalized
    /// prediction.
    pub fn denormalize_coefficients(
        &self,
        weights: &Vector,
        bias: f64,
    ) -> RegressionResult<(Vector, f64)> {
        self.check_columns(weights.len())?;

        let raw_weights = weights / &self.std;
        let raw_bias = bias - raw_weights.dot(&self.mean);
        Ok((raw_weights, raw_bias))
    }

    fn check_columns(&self, n_columns: usize) -> RegressionResult<()> {
        if n_columns != self.n_features() {
            return Err(RegressionError::invalid(format!(
                "number of features ({}) doesn't match normalization parameters ({})",
                n_columns,
                self.n_features()
            )));
        }
        Ok(())
    }
}

pub struct StandardScaler {
    params: Option<NormalizationParams>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self { params: None }
    }

    pub fn fit(&mut self, data: &Matrix) -> RegressionResult<()> {
        self.params = Some(NormalizationParams::fit(data)?);
        Ok(())
    }

    pub fn params(&self) -> Option<&NormalizationParams> {
        self.params.as_ref()
    }

    pub fn transform(&self, data: &Matrix) -> RegressionResult<Matrix> {
        self.fitted()?.transform(data)
    }

    pub fn inverse_transform(&self, data: &Matrix) -> RegressionResult<Matrix> {
        self.fitted()?.inverse_transform(data)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> RegressionResult<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    fn fitted(&self) -> RegressionResult<&NormalizationParams> {
        self.params.as_ref().ok_or_else(|| {
            RegressionError::invalid("scaler not fitted. Call fit() first.")
        })
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

/// Standardizes every feature column of `dataset` to zero mean and unit
/// population standard deviation.
pub fn normalize(dataset: &Dataset) -> RegressionResult<(Matrix, NormalizationParams)> {
    let params = NormalizationParams::fit(dataset.features())?;
    let normalized = params.transform(dataset.features())?;
    Ok((normalized, params))
}
