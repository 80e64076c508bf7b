//! Linear regression fitted by full-batch gradient descent.
//!
//! The pieces compose in one direction: a [`Dataset`] is standardized by
//! [`normalize`], the normalized features train a [`LinearRegression`], and
//! its predictions are scored with [`metrics::evaluate`]. [`FittedPipeline`]
//! wires the three together for callers that only hold raw data.
//!
//! ```rust
//! use gdlinreg::{Dataset, FittedPipeline, TrainConfig};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.5], [2.0, -1.0], [3.0, 2.0], [4.0, 0.0]];
//! let y = array![3.0, 2.5, 8.0, 6.0];
//! let dataset = Dataset::new(x, y).unwrap();
//!
//! let pipeline = FittedPipeline::fit(&dataset, &TrainConfig::default()).unwrap();
//! let prediction = pipeline.predict_line("2.5, 1.0").unwrap();
//! assert!(prediction.is_finite());
//! ```

pub use ndarray::{Array1, Array2, ArrayView1};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod loader;
pub mod metrics;
pub mod pipeline;
pub mod preprocessing;

pub use dataset::Dataset;
pub use error::{RegressionError, RegressionResult};
pub use linear_model::{EpochObserver, LinearRegression, TrainConfig};
pub use loader::{load_csv, load_csv_path, LabeledDataset};
pub use metrics::Metrics;
pub use pipeline::FittedPipeline;
pub use preprocessing::{normalize, NormalizationParams, StandardScaler};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
