use super::observer::{EpochObserver, Unobserved};
use crate::error::{RegressionError, RegressionResult};
use crate::{ArrayView1, Matrix, Vector};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn validate(&self) -> RegressionResult<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RegressionError::invalid(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::new(0.01, 1000)
    }
}

/// Linear model `ŷ = x · w + b` fitted by batch gradient descent on the
/// mean-squared error.
///
/// Features are expected to be standardized already; the model keeps no
/// normalization state of its own.
#[derive(Clone, Debug, Default)]
pub struct LinearRegression {
    weights: Option<Vector>,
    bias: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: 0.0,
        }
    }

    pub fn weights(&self) -> Option<&Vector> {
        self.weights.as_ref()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    pub fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(Vector::len)
    }

    /// Runs `epochs` full-batch gradient steps.
    ///
    /// Weights restart from zero on every call while the bias continues from
    /// its current value.
    pub fn train(
        &mut self,
        x: &Matrix,
        y: &Vector,
        learning_rate: f64,
        epochs: usize,
    ) -> RegressionResult<()> {
        self.train_with_observer(x, y, &TrainConfig::new(learning_rate, epochs), &mut Unobserved)
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector, config: &TrainConfig) -> RegressionResult<()> {
        self.train_with_observer(x, y, config, &mut Unobserved)
    }

    /// Same as [`train`](Self::train), reporting each epoch's loss to
    /// `observer`. Nothing is committed to the model unless every epoch
    /// completes with finite parameters.
    pub fn train_with_observer<O>(
        &mut self,
        x: &Matrix,
        y: &Vector,
        config: &TrainConfig,
        observer: &mut O,
    ) -> RegressionResult<()>
    where
        O: EpochObserver + ?Sized,
    {
        config.validate()?;
        validate_training_data(x, y)?;

        let n_samples = x.nrows() as f64;
        let mut weights = Vector::zeros(x.ncols());
        let mut bias = self.bias;

        debug!(
            "training on {} samples x {} features: learning_rate={}, epochs={}",
            x.nrows(),
            x.ncols(),
            config.learning_rate,
            config.epochs
        );

        for epoch in 0..config.epochs {
            let predictions = x.dot(&weights) + bias;
            let errors = y - &predictions;

            let mse = errors.dot(&errors) / n_samples;
            if !mse.is_finite() {
                return Err(RegressionError::degenerate(format!(
                    "training loss diverged at epoch {}; lower the learning rate",
                    epoch
                )));
            }
            trace!("epoch {}: mse={}", epoch, mse);

            if observer.on_epoch(epoch, mse).is_break() {
                debug!("training cancelled by observer at epoch {}", epoch);
                return Err(RegressionError::Cancelled {
                    epochs_completed: epoch,
                });
            }

            let weight_gradient = x.t().dot(&errors) * (-2.0 / n_samples);
            let bias_gradient = -2.0 / n_samples * errors.sum();

            weights.scaled_add(-config.learning_rate, &weight_gradient);
            bias -= config.learning_rate * bias_gradient;

            if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                return Err(RegressionError::degenerate(format!(
                    "parameters became non-finite at epoch {}; lower the learning rate",
                    epoch
                )));
            }
        }

        debug!("training finished: weights={}, bias={}", weights, bias);
        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> RegressionResult<Vector> {
        let weights = self.weights.as_ref().ok_or(RegressionError::NotFitted)?;

        if x.ncols() != weights.len() {
            return Err(RegressionError::invalid(format!(
                "number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                weights.len()
            )));
        }

        Ok(x.dot(weights) + self.bias)
    }

    pub fn predict_one(&self, row: ArrayView1<'_, f64>) -> RegressionResult<f64> {
        let weights = self.weights.as_ref().ok_or(RegressionError::NotFitted)?;

        if row.len() != weights.len() {
            return Err(RegressionError::invalid(format!(
                "expected {} features, got {}",
                weights.len(),
                row.len()
            )));
        }

        Ok(row.dot(weights) + self.bias)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> RegressionResult<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}

fn validate_training_data(x: &Matrix, y: &Vector) -> RegressionResult<()> {
    if x.nrows() != y.len() {
        return Err(RegressionError::invalid(format!(
            "number of samples in X ({}) and y ({}) must match",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() == 0 {
        return Err(RegressionError::invalid("X must have at least one sample"));
    }
    if x.ncols() == 0 {
        return Err(RegressionError::invalid("X must have at least one feature"));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(RegressionError::invalid("training data contains non-finite values"));
    }
    Ok(())
}
