use thiserror::Error;

pub type RegressionResult<T> = Result<T, RegressionError>;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid feature {index}: {reason}")]
    InvalidFeature { index: usize, reason: String },
    #[error("model not fitted. Call train() first.")]
    NotFitted,
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
    #[error("training cancelled after {epochs_completed} epochs")]
    Cancelled { epochs_completed: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl RegressionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RegressionError::InvalidInput(message.into())
    }

    pub fn feature(index: usize, reason: impl Into<String>) -> Self {
        RegressionError::InvalidFeature {
            index,
            reason: reason.into(),
        }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        RegressionError::NumericDegeneracy(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegressionError::invalid("X has 10 rows but y has 7");
        assert_eq!(err.to_string(), "invalid input: X has 10 rows but y has 7");

        let err = RegressionError::feature(2, "zero standard deviation");
        assert_eq!(err.to_string(), "invalid feature 2: zero standard deviation");

        let err = RegressionError::Cancelled { epochs_completed: 5 };
        assert_eq!(err.to_string(), "training cancelled after 5 epochs");
    }
}
