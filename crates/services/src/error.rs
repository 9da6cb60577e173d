use streetcode_core::error::CoreError;

use crate::blob::BlobError;

/// Failure of a request handler or validator.
///
/// Domain outcomes (validation, not found, zero rows written) are
/// [`CoreError`]s. Database and blob errors are propagated unchanged so the
/// HTTP layer can log them and answer 500.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Blob(#[from] BlobError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// The wrapped domain error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(core) => Some(core),
            _ => None,
        }
    }
}

/// Log a not-found outcome and build the matching error.
pub(crate) fn not_found(message: String) -> ServiceError {
    tracing::error!(error = %message, "Lookup failed");
    CoreError::NotFound(message).into()
}

/// Log a write that affected nothing and build the matching error.
pub(crate) fn persistence(message: &str) -> ServiceError {
    tracing::error!(error = %message, "Write failed");
    CoreError::Persistence(message.to_string()).into()
}

/// Map the "nothing was written" outcome of a `RETURNING` write.
pub(crate) trait WriteResultExt<T> {
    /// `RowNotFound` becomes [`CoreError::Persistence`] with `message`;
    /// every other database error is propagated unchanged.
    fn or_persistence(self, message: &str) -> ServiceResult<T>;
}

impl<T> WriteResultExt<T> for Result<T, sqlx::Error> {
    fn or_persistence(self, message: &str) -> ServiceResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(sqlx::Error::RowNotFound) => Err(persistence(message)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_on_write_is_a_persistence_failure() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        assert_matches!(
            result.or_persistence("Failed to create a fact"),
            Err(ServiceError::Core(CoreError::Persistence(msg))) if msg == "Failed to create a fact"
        );

        let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        assert_matches!(result.or_persistence("x"), Err(ServiceError::Database(_)));
    }
}
