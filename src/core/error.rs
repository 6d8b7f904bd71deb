use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpurityError {
    #[error("invalid distribution: class {index} has count {value}")]
    InvalidDistribution { index: usize, value: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("attribute '{attribute}' has no value '{value}'")]
    UnknownValue { attribute: String, value: String },

    #[error("attribute '{attribute}' expects a finite number, got '{value}'")]
    InvalidNumber { attribute: String, value: String },

    #[error("row has {got} values but the table declares {expected} attributes")]
    RowArity { expected: usize, got: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
