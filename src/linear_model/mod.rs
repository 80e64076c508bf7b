//! Linear regression trained with full-batch gradient descent.
//!
//! This module provides:
//! - `LinearRegression`: a weight vector and bias fitted on the mean-squared
//!   error objective
//! - `TrainConfig`: learning rate and epoch count
//! - `EpochObserver`: a per-epoch hook for diagnostics and cancellation
//!
//! # Examples
//!
//! ```rust
//! use gdlinreg::LinearRegression;
//! use ndarray::array;
//!
//! // Already standardized features.
//! let x = array![[-1.5], [-0.5], [0.5], [1.5]];
//! let y = array![1.0, 3.0, 5.0, 7.0];
//!
//! let mut model = LinearRegression::new();
//! model.train(&x, &y, 0.1, 500).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert!((predictions[0] - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Watching the loss
//! ```rust
//! use gdlinreg::{LinearRegression, TrainConfig};
//! use ndarray::array;
//! use std::ops::ControlFlow;
//!
//! let x = array![[-1.0], [0.0], [1.0]];
//! let y = array![0.0, 1.0, 2.0];
//!
//! let mut losses = Vec::new();
//! let mut model = LinearRegression::new();
//! let mut record = |_epoch: usize, mse: f64| -> ControlFlow<()> {
//!     losses.push(mse);
//!     ControlFlow::Continue(())
//! };
//! model
//!     .train_with_observer(&x, &y, &TrainConfig::default(), &mut record)
//!     .unwrap();
//! assert_eq!(losses.len(), 1000);
//! ```

mod linear_regression;
mod observer;

pub use linear_regression::{LinearRegression, TrainConfig};
pub use observer::EpochObserver;
