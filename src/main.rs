mod report;
mod session;

use anyhow::Context;
use clap::Parser;
use gdlinreg::{load_csv_path, Dataset, FittedPipeline, LabeledDataset, TrainConfig};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to fit. The last column is the target.
    /// Demo data is generated when no file is given.
    data: Option<PathBuf>,

    /// Gradient descent step size
    #[arg(short, long, default_value_t = 0.01)]
    learning_rate: f64,

    /// Number of full-batch epochs
    #[arg(short, long, default_value_t = 1000)]
    epochs: usize,

    /// Samples in the generated demo dataset
    #[arg(long, default_value_t = 100)]
    demo_samples: usize,

    /// Features in the generated demo dataset
    #[arg(long, default_value_t = 3)]
    demo_features: usize,

    /// Seed for the demo data generator
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Write weights, normalization parameters and metrics as JSON
    #[arg(long, default_value = None)]
    summary_json: Option<PathBuf>,

    /// Skip the interactive prediction prompt
    #[arg(long)]
    no_interactive: bool,
}

fn load(args: &Args) -> anyhow::Result<LabeledDataset> {
    match &args.data {
        Some(path) => {
            load_csv_path(path).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let dataset = Dataset::synthetic(args.demo_samples, args.demo_features, &mut rng)?;
            let feature_names = (1..=args.demo_features)
                .map(|i| format!("Feature {}", i))
                .collect();
            Ok(LabeledDataset {
                feature_names,
                dataset,
            })
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to the Machine Learning Tool!");
    println!("=====================================");

    let LabeledDataset {
        feature_names,
        dataset,
    } = load(&args)?;
    info!(
        "dataset: {} samples x {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    let config = TrainConfig::new(args.learning_rate, args.epochs);
    let pipeline = FittedPipeline::fit(&dataset, &config).context("fitting model")?;

    println!("\nModel Results:");
    println!("==============");
    println!("{}", report::metrics_table(pipeline.metrics()));

    println!("\nModel Coefficients:");
    println!("===================");
    println!("{}", report::coefficients_table(&pipeline, &feature_names));
    println!("\nBias: {:.4}", pipeline.model().bias());

    if let Some(path) = &args.summary_json {
        report::write_summary(path, &pipeline, &feature_names)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nFit summary saved as '{}'", path.display());
    }

    if !args.no_interactive {
        let stdin = io::stdin();
        let predicted = session::run(&pipeline, stdin.lock(), io::stdout())?;
        info!("served {} predictions", predicted);
    }

    println!("Thank you for using the Machine Learning Tool!");
    Ok(())
}
