use gdlinreg::FittedPipeline;
use log::warn;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "\nEnter values for prediction (comma-separated) or 'q' to quit: ";

/// Reads one feature vector per line and prints its prediction until `q` or
/// end of input. A line that fails to parse is reported and skipped.
pub fn run<R, W>(pipeline: &FittedPipeline, input: R, mut output: W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut predicted = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        match pipeline.predict_line(line) {
            Ok(prediction) => {
                writeln!(output, "Predicted value: {:.4}", prediction)?;
                predicted += 1;
            }
            Err(e) => {
                warn!("rejected input {:?}: {}", line, e);
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    Ok(predicted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdlinreg::{Dataset, TrainConfig};
    use ndarray::array;

    fn pipeline() -> FittedPipeline {
        let x = array![[-2.0], [-1.0], [0.0], [1.0], [2.0]];
        let y = x.column(0).mapv(|v| 4.0 * v + 1.0);
        let dataset = Dataset::new(x, y).unwrap();
        FittedPipeline::fit(&dataset, &TrainConfig::new(0.1, 500)).unwrap()
    }

    #[test]
    fn test_session_predicts_until_quit() {
        let input = "1.5\n0\nQ\n3\n";
        let mut output = Vec::new();

        let predicted = run(&pipeline(), input.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(predicted, 2);
        assert!(output.contains("Predicted value: 7.0000"));
        assert!(output.contains("Predicted value: 1.0000"));
        assert!(!output.contains("13.0000"));
    }

    #[test]
    fn test_session_survives_bad_input() {
        let input = "abc\n1,2\n2\n";
        let mut output = Vec::new();

        let predicted = run(&pipeline(), input.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(predicted, 1);
        assert_eq!(output.matches("Error:").count(), 2);
        assert!(output.contains("Predicted value: 9.0000"));
    }
}
