use thiserror::Error;

/// Error type for every fallible operation in the simulation crate.
///
/// All variants describe usage errors: nothing here is transient, so callers
/// are expected to surface them rather than retry.
#[derive(Debug, Error)]
pub enum SimError {
    /// A buffer or parameter vector does not have the shape the operation needs.
    #[error("Shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A probability parameter lies outside [0, 1] (or is NaN).
    #[error("Invalid probability for {name}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A genotype cell holds something other than 0 or 1.
    #[error("Invalid allele {value} at row {row}, column {col} (must be 0 or 1)")]
    InvalidAllele { row: usize, col: usize, value: u8 },

    /// A count or size argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// A required builder parameter was never set.
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// The configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn shape(what: &'static str, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            found,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Type alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Check that `value` is a probability, naming the parameter on failure.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability("c", 0.0).is_ok());
        assert!(check_probability("c", 1.0).is_ok());
        assert!(matches!(
            check_probability("c", 1.5),
            Err(SimError::InvalidProbability { name: "c", .. })
        ));
        assert!(check_probability("c", -0.1).is_err());
        assert!(check_probability("c", f64::NAN).is_err());
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = SimError::shape("recombination rates", 3, 2);
        assert_eq!(
            err.to_string(),
            "Shape mismatch in recombination rates: expected 3, found 2"
        );
    }
}
