use crate::error::{RegressionError, RegressionResult};
use crate::{Matrix, Vector};
use ndarray::Axis;
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use rand::Rng;

const DEMO_FEATURE_RANGE: (f64, f64) = (-5.0, 5.0);
const DEMO_NOISE_STD: f64 = 0.5;

/// A rectangular feature matrix paired with one target per row.
///
/// Construction validates the shape and rejects non-finite values, so every
/// `Dataset` in hand has at least one sample and one feature.
#[derive(Clone, Debug)]
pub struct Dataset {
    features: Matrix,
    targets: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> RegressionResult<Self> {
        if features.nrows() != targets.len() {
            return Err(RegressionError::invalid(format!(
                "number of samples in features ({}) and targets ({}) must match",
                features.nrows(),
                targets.len()
            )));
        }
        if features.nrows() == 0 {
            return Err(RegressionError::invalid("dataset must have at least one sample"));
        }
        if features.ncols() == 0 {
            return Err(RegressionError::invalid("dataset must have at least one feature"));
        }
        if let Some((row, _)) = features
            .axis_iter(Axis(0))
            .enumerate()
            .find(|(_, row)| row.iter().any(|v| !v.is_finite()))
        {
            return Err(RegressionError::invalid(format!(
                "feature row {} contains a non-finite value",
                row
            )));
        }
        if let Some(row) = targets.iter().position(|v| !v.is_finite()) {
            return Err(RegressionError::invalid(format!(
                "target {} is not finite",
                row
            )));
        }

        Ok(Self { features, targets })
    }

    /// Builds a dataset from row-major samples, rejecting ragged rows.
    pub fn from_rows(rows: Vec<Vec<f64>>, targets: Vec<f64>) -> RegressionResult<Self> {
        let n_features = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = rows.iter().position(|r| r.len() != n_features) {
            return Err(RegressionError::invalid(format!(
                "row {} has {} features, expected {}",
                row,
                rows[row].len(),
                n_features
            )));
        }

        let n_samples = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let features = Matrix::from_shape_vec((n_samples, n_features), flat)
            .map_err(|e| RegressionError::invalid(e.to_string()))?;

        Self::new(features, Vector::from(targets))
    }

    /// Demo data: features drawn uniformly from [-5, 5), target is the sum of
    /// the features plus gaussian noise with standard deviation 0.5.
    pub fn synthetic<R: Rng + ?Sized>(
        n_samples: usize,
        n_features: usize,
        rng: &mut R,
    ) -> RegressionResult<Self> {
        let noise = Normal::new(0.0, DEMO_NOISE_STD)
            .map_err(|e| RegressionError::invalid(e.to_string()))?;
        let features = Matrix::random_using(
            (n_samples, n_features),
            Uniform::new(DEMO_FEATURE_RANGE.0, DEMO_FEATURE_RANGE.1),
            rng,
        );
        let targets = features.sum_axis(Axis(1)) + Vector::random_using(n_samples, noise, rng);

        Self::new(features, targets)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn targets(&self) -> &Vector {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, targets).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_rejects_mismatched_rows() {
        let features = array![[1.0], [2.0]];
        let targets = array![1.0, 2.0, 3.0];

        let err = Dataset::new(features, targets).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_dataset_rejects_empty() {
        let err = Dataset::new(Matrix::zeros((0, 2)), Vector::zeros(0)).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));

        let err = Dataset::new(Matrix::zeros((3, 0)), Vector::zeros(3)).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_dataset_rejects_non_finite() {
        let features = array![[1.0], [f64::NAN]];
        let targets = array![1.0, 2.0];
        assert!(Dataset::new(features, targets).is_err());

        let features = array![[1.0], [2.0]];
        let targets = array![1.0, f64::INFINITY];
        assert!(Dataset::new(features, targets).is_err());
    }

    #[test]
    fn test_from_rows() {
        let dataset =
            Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.5, 1.5]).unwrap();
        assert_eq!(dataset.features(), &array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(dataset.targets(), &array![0.5, 1.5]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![0.5, 1.5]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_synthetic_dataset() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = Dataset::synthetic(100, 3, &mut rng).unwrap();

        assert_eq!(dataset.n_samples(), 100);
        assert_eq!(dataset.n_features(), 3);
        assert!(dataset.features().iter().all(|v| (-5.0..5.0).contains(v)));

        let residual = dataset.targets() - &dataset.features().sum_axis(Axis(1));
        assert!(residual.iter().all(|r| r.abs() < 5.0 * DEMO_NOISE_STD));
    }
}
