use crate::dataset::Dataset;
use crate::error::{RegressionError, RegressionResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A dataset together with the names of its feature columns.
#[derive(Clone, Debug)]
pub struct LabeledDataset {
    pub feature_names: Vec<String>,
    pub dataset: Dataset,
}

/// Reads a CSV table whose header names the columns and whose last column
/// is the target. Every cell must parse as a number.
pub fn load_csv<R: Read>(reader: R) -> RegressionResult<LabeledDataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let header = reader.headers()?.clone();
    if header.len() < 2 {
        return Err(RegressionError::invalid(format!(
            "expected at least one feature column and a target column, got {} columns",
            header.len()
        )));
    }
    let n_features = header.len() - 1;
    let feature_names = header
        .iter()
        .take(n_features)
        .map(|name| name.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut targets = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Row numbers in messages count the header as line 1.
        let line = i + 2;
        let values = record
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                cell.trim().parse::<f64>().map_err(|e| {
                    RegressionError::invalid(format!(
                        "line {}, column {}: cannot parse {:?} as a number ({})",
                        line,
                        column + 1,
                        cell,
                        e
                    ))
                })
            })
            .collect::<RegressionResult<Vec<f64>>>()?;

        let (features, target) = values.split_at(n_features);
        rows.push(features.to_vec());
        targets.push(target[0]);
    }

    if rows.is_empty() {
        return Err(RegressionError::invalid("no data rows found in CSV"));
    }

    let dataset = Dataset::from_rows(rows, targets)?;
    Ok(LabeledDataset {
        feature_names,
        dataset,
    })
}

pub fn load_csv_path<P: AsRef<Path>>(path: P) -> RegressionResult<LabeledDataset> {
    let file = File::open(path)?;
    load_csv(file)
}
