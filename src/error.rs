use thiserror::Error;

/// Errors raised around the amortization engine: input validation, loading
/// and exporting. The formulas themselves never fail.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown simulation kind: {0}")]
    UnknownKind(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid share URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SimulationError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SimulationResult<T> = Result<T, SimulationError>;
