use thiserror::Error;

/// Errors related to barber operations.
#[derive(Debug, Error)]
pub enum BarberError {
    #[error("barber not found")]
    NotFound,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in barbershop-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barber_error_display() {
        let err = BarberError::StorageError("database is locked".to_string());
        assert_eq!(err.to_string(), "storage error: database is locked");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
