use comfy_table::{Cell, CellAlignment, Table};
use gdlinreg::{FittedPipeline, Metrics, RegressionResult};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const TABLE_PRESET: &str = "||--+-++|    ++++++";

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.load_preset(TABLE_PRESET);
    table.set_header(header.into_iter().map(|h| Cell::new(h.into())).collect::<Vec<_>>());
    table
}

fn fmt4(value: f64) -> String {
    format!("{:.4}", value)
}

pub fn metrics_table(metrics: &Metrics) -> Table {
    let mut table = new_table(["Metric", "Value"]);
    table.add_row(vec!["Mean Squared Error".to_string(), fmt4(metrics.mse)]);
    table.add_row(vec!["Mean Absolute Error".to_string(), fmt4(metrics.mae)]);
    table.add_row(vec!["R-squared".to_string(), fmt4(metrics.r2)]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// One column per feature: the weight learned on standardized inputs and the
/// mean and standard deviation used to standardize it.
pub fn coefficients_table(pipeline: &FittedPipeline, feature_names: &[String]) -> Table {
    let header = std::iter::once("Metric".to_string()).chain(feature_names.iter().cloned());
    let mut table = new_table(header);

    let params = pipeline.params();
    let weights = pipeline
        .model()
        .weights()
        .map(|w| w.iter().copied().map(fmt4).collect::<Vec<_>>())
        .unwrap_or_default();

    let rows = [
        ("Coefficient", weights),
        ("Mean", params.mean().iter().copied().map(fmt4).collect()),
        ("Std Dev", params.std().iter().copied().map(fmt4).collect()),
    ];
    for (label, values) in rows {
        table.add_row(std::iter::once(label.to_string()).chain(values).collect::<Vec<_>>());
    }
    table
}

#[derive(Serialize)]
struct FitSummary<'a> {
    feature_names: &'a [String],
    weights: Vec<f64>,
    bias: f64,
    raw_weights: Vec<f64>,
    raw_bias: f64,
    normalization: &'a gdlinreg::NormalizationParams,
    metrics: &'a Metrics,
}

pub fn write_summary(
    path: &Path,
    pipeline: &FittedPipeline,
    feature_names: &[String],
) -> RegressionResult<()> {
    let (raw_weights, raw_bias) = pipeline.raw_coefficients()?;
    let summary = FitSummary {
        feature_names,
        weights: pipeline
            .model()
            .weights()
            .map(|w| w.to_vec())
            .unwrap_or_default(),
        bias: pipeline.model().bias(),
        raw_weights: raw_weights.to_vec(),
        raw_bias,
        normalization: pipeline.params(),
        metrics: pipeline.metrics(),
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &summary).map_err(std::io::Error::from)?;
    Ok(())
}
