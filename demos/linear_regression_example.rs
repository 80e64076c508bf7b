use gdlinreg::metrics::evaluate;
use gdlinreg::{normalize, Dataset, LinearRegression, Matrix, RegressionResult, TrainConfig};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::ControlFlow;

fn main() -> RegressionResult<()> {
    // y = 2 * x1 - 3 * x2 + 5, no noise
    let mut rng = StdRng::seed_from_u64(2024);
    let features = Matrix::random_using((200, 2), Uniform::new(-5.0, 5.0), &mut rng);
    let targets =
        features.column(0).mapv(|v| 2.0 * v) - features.column(1).mapv(|v| 3.0 * v) + 5.0;
    let dataset = Dataset::new(features, targets)?;
    println!(
        "Dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let (normalized, params) = normalize(&dataset)?;

    let config = TrainConfig::default().learning_rate(0.05).epochs(2000);
    let mut model = LinearRegression::new();
    model.train_with_observer(
        &normalized,
        dataset.targets(),
        &config,
        &mut |epoch: usize, mse: f64| -> ControlFlow<()> {
            if epoch % 250 == 0 {
                println!("  epoch {:>4}: mse = {:.6}", epoch, mse);
            }
            ControlFlow::Continue(())
        },
    )?;

    let predictions = model.predict(&normalized)?;
    let metrics = evaluate(dataset.targets(), &predictions)?;
    println!("\nResults:");
    println!("  MSE: {:.6}", metrics.mse);
    println!("  MAE: {:.6}", metrics.mae);
    println!("  R²:  {:.6}", metrics.r2);

    if let Some(weights) = model.weights() {
        let (raw_weights, raw_bias) = params.denormalize_coefficients(weights, model.bias())?;
        println!("\nNormalized weights: {}, bias: {:.4}", weights, model.bias());
        println!("Raw-scale weights:  {}, bias: {:.4}", raw_weights, raw_bias);
    }

    let row = params.transform_row(&[1.0, 2.0])?;
    println!("\nPrediction at (1, 2): {:.4}", model.predict_one(row.view())?);

    Ok(())
}
