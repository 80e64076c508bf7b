use crate::dataset::Dataset;
use crate::error::{RegressionError, RegressionResult};
use crate::linear_model::{LinearRegression, TrainConfig};
use crate::metrics::{self, Metrics};
use crate::preprocessing::{normalize, NormalizationParams};
use crate::{Matrix, Vector};
use log::info;

/// Normalization parameters, a model trained on the normalized features,
/// and its fit quality on the training set.
#[derive(Clone, Debug)]
pub struct FittedPipeline {
    params: NormalizationParams,
    model: LinearRegression,
    metrics: Metrics,
}

impl FittedPipeline {
    pub fn fit(dataset: &Dataset, config: &TrainConfig) -> RegressionResult<Self> {
        let (normalized, params) = normalize(dataset)?;

        let mut model = LinearRegression::new();
        model.fit(&normalized, dataset.targets(), config)?;

        let predictions = model.predict(&normalized)?;
        let metrics = metrics::evaluate(dataset.targets(), &predictions)?;
        info!(
            "fitted {} samples: mse={:.4}, mae={:.4}, r2={:.4}",
            dataset.n_samples(),
            metrics.mse,
            metrics.mae,
            metrics.r2
        );

        Ok(Self {
            params,
            model,
            metrics,
        })
    }

    pub fn params(&self) -> &NormalizationParams {
        &self.params
    }

    pub fn model(&self) -> &LinearRegression {
        &self.model
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }

    /// Predicts targets for raw, unnormalized feature rows.
    pub fn predict_raw(&self, x: &Matrix) -> RegressionResult<Vector> {
        let normalized = self.params.transform(x)?;
        self.model.predict(&normalized)
    }

    pub fn predict_row(&self, row: &[f64]) -> RegressionResult<f64> {
        let normalized = self.params.transform_row(row)?;
        self.model.predict_one(normalized.view())
    }

    /// Parses a comma-separated line of raw feature values and predicts it.
    pub fn predict_line(&self, line: &str) -> RegressionResult<f64> {
        let row = parse_feature_line(line, self.n_features())?;
        self.predict_row(&row)
    }

    /// Weights and bias expressed on the raw feature scale.
    pub fn raw_coefficients(&self) -> RegressionResult<(Vector, f64)> {
        let weights = self.model.weights().ok_or(RegressionError::NotFitted)?;
        self.params.denormalize_coefficients(weights, self.model.bias())
    }
}

pub fn parse_feature_line(line: &str, n_features: usize) -> RegressionResult<Vec<f64>> {
    let values: Vec<&str> = line.split(',').map(str::trim).collect();
    if values.len() != n_features {
        return Err(RegressionError::invalid(format!(
            "expected {} values, got {}",
            n_features,
            values.len()
        )));
    }

    values
        .iter()
        .map(|value| {
            let parsed = value.parse::<f64>().map_err(|e| {
                RegressionError::invalid(format!("cannot parse {:?}: {}", value, e))
            })?;
            if parsed.is_finite() {
                Ok(parsed)
            } else {
                Err(RegressionError::invalid(format!("{:?} is not a finite number", value)))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn housing() -> Dataset {
        // price = 3 * size - 2 * age + 10
        let x = array![
            [50.0, 10.0],
            [80.0, 5.0],
            [120.0, 30.0],
            [65.0, 1.0],
            [90.0, 22.0],
            [150.0, 12.0]
        ];
        let y = x.column(0).mapv(|v| 3.0 * v) - x.column(1).mapv(|v| 2.0 * v) + 10.0;
        Dataset::new(x, y).unwrap()
    }

    #[test]
    fn test_pipeline_fit_and_predict_raw() {
        let dataset = housing();
        let pipeline = FittedPipeline::fit(&dataset, &TrainConfig::new(0.05, 3000)).unwrap();

        assert!(pipeline.metrics().r2 > 0.9999);
        let predictions = pipeline.predict_raw(&array![[100.0, 20.0]]).unwrap();
        assert!((predictions[0] - 270.0).abs() < 1e-3);

        let (weights, bias) = pipeline.raw_coefficients().unwrap();
        assert!((weights[0] - 3.0).abs() < 1e-4);
        assert!((weights[1] + 2.0).abs() < 1e-4);
        assert!((bias - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_predict_line() {
        let pipeline = FittedPipeline::fit(&housing(), &TrainConfig::new(0.05, 3000)).unwrap();

        let single = pipeline.predict_line(" 100 , 20 ").unwrap();
        let batch = pipeline.predict_raw(&array![[100.0, 20.0]]).unwrap();
        assert!((single - batch[0]).abs() < 1e-9);
    }

    #[test]
    fn test_bad_lines_do_not_poison_the_pipeline() {
        let pipeline = FittedPipeline::fit(&housing(), &TrainConfig::default()).unwrap();

        assert!(matches!(
            pipeline.predict_line("1,2,3"),
            Err(RegressionError::InvalidInput(_))
        ));
        assert!(matches!(
            pipeline.predict_line("1,abc"),
            Err(RegressionError::InvalidInput(_))
        ));
        assert!(pipeline.predict_line("1,inf").is_err());
        assert!(pipeline.predict_line("60,4").is_ok());
    }

    #[test]
    fn test_constant_feature_aborts_fit() {
        let x = array![[1.0, 7.0], [2.0, 7.0], [3.0, 7.0]];
        let dataset = Dataset::new(x, array![1.0, 2.0, 3.0]).unwrap();

        let err = FittedPipeline::fit(&dataset, &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidFeature { index: 1, .. }));
    }

    #[test]
    fn test_constant_target_aborts_fit() {
        let x = array![[1.0], [2.0], [3.0]];
        let dataset = Dataset::new(x, array![0.1, 0.1, 0.1]).unwrap();

        let err = FittedPipeline::fit(&dataset, &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, RegressionError::NumericDegeneracy(_)));
    }

    #[test]
    fn test_predict_row_matches_predict_raw() {
        let pipeline = FittedPipeline::fit(&housing(), &TrainConfig::new(0.05, 3000)).unwrap();

        let single = pipeline.predict_row(&[75.0, 8.0]).unwrap();
        let batch = pipeline.predict_raw(&array![[75.0, 8.0]]).unwrap();
        assert!((single - batch[0]).abs() < 1e-9);
        assert!(pipeline.predict_row(&[75.0]).is_err());
    }

    #[test]
    fn test_demo_data_fit() {
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = Dataset::synthetic(100, 3, &mut rng).unwrap();

        let pipeline = FittedPipeline::fit(&dataset, &TrainConfig::default()).unwrap();
        assert!(pipeline.metrics().r2 > 0.9);
        assert_eq!(pipeline.n_features(), 3);
    }

    #[test]
    fn test_parse_feature_line() {
        assert_eq!(parse_feature_line("1.5,-2, 3e2", 3).unwrap(), vec![1.5, -2.0, 300.0]);
        assert!(parse_feature_line("", 1).is_err());
        assert!(parse_feature_line("1,2", 3).is_err());
    }
}
