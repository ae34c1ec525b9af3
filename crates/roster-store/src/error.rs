//! Store error types.

use thiserror::Error;

/// Errors raised while talking to the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening or checking out a connection failed.
    #[error("{0}")]
    Connection(String),

    /// The statement itself failed. Carries the database's own message.
    #[error("{0}")]
    Query(String),

    /// A result row is missing a column the caller relies on.
    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

impl From<tokio_rusqlite::Error> for StoreError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Rusqlite(e) => StoreError::Query(e.to_string()),
            tokio_rusqlite::Error::ConnectionClosed => {
                StoreError::Connection("connection closed".to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_keeps_database_message() {
        let err = StoreError::from(rusqlite::Error::InvalidColumnName("NOPE".to_string()));
        assert!(err.to_string().contains("NOPE"));
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[test]
    fn test_connection_closed() {
        let err = StoreError::from(tokio_rusqlite::Error::ConnectionClosed);
        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn test_malformed_row_display() {
        let err = StoreError::MalformedRow("COMPANY_ID".to_string());
        assert_eq!(err.to_string(), "Malformed row: COMPANY_ID");
    }
}
