use thiserror::Error;

/// Application-level error type.
/// Every failure the loader, engine, or renderer can raise is one of these, so the
/// CLI can map it to a one-line diagnosis and an exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Missing required columns: {}. Required columns are: {}",
        missing.join(", "),
        required.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },

    #[error(
        "Invalid Classification values found: {}. Valid values are: Desirable, Essential, Implicit, Important",
        values.join(", ")
    )]
    InvalidClassification { values: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Computation failed: {0}")]
    Computation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, printed in CLI diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::MissingColumns { .. } => "MISSING_COLUMNS",
            AppError::InvalidClassification { .. } => "INVALID_CLASSIFICATION",
            AppError::Io(_) => "IO_ERROR",
            AppError::Csv(_) => "CSV_ERROR",
            AppError::Computation(_) => "COMPUTATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures caused by the input table rather than the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_)
                | AppError::MissingColumns { .. }
                | AppError::InvalidClassification { .. }
                | AppError::Io(_)
                | AppError::Csv(_)
        )
    }

    /// Hint line printed under the diagnosis.
    pub fn hint(&self) -> &'static str {
        if self.is_input_error() {
            "Please ensure the CSV file exists and follows the required format. Use --help for more information."
        } else {
            "The skill matrix data appears to be invalid. Please check your input."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_required_set() {
        let err = AppError::MissingColumns {
            missing: vec!["SelfScore".to_string()],
            required: vec![
                "Classification".to_string(),
                "Requirement".to_string(),
                "SelfScore".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Missing required columns: SelfScore"));
        assert!(msg.contains("Classification, Requirement, SelfScore"));
        assert_eq!(err.code(), "MISSING_COLUMNS");
    }

    #[test]
    fn test_invalid_classification_lists_values() {
        let err = AppError::InvalidClassification {
            values: vec!["Critical".to_string(), "Optional".to_string()],
        };
        assert!(err.to_string().contains("Critical, Optional"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_computation_is_not_input_error() {
        let err = AppError::Computation("non-finite raw score".to_string());
        assert!(!err.is_input_error());
        assert_eq!(err.code(), "COMPUTATION_ERROR");
    }
}
