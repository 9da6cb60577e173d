use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more field-level rules failed. Produced by the validation pipeline.
    #[error("Validation failed: {}", join_messages(.0))]
    InvalidFields(Vec<FieldViolation>),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A write affected zero rows.
    #[error("{0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_messages(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
