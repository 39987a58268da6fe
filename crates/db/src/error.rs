//! Error taxonomy for one invocation's database work.
//!
//! Three classes, mirroring the invocation's three phases: `Connection` and
//! `Schema` are fatal for the invocation; `Execution` is caught and surfaced
//! to the caller as the uniform failure response.

/// A database-layer failure within one invocation.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The session could not be established: unreachable host, rejected
    /// credentials, or an expired connect deadline.
    #[error("failed to open database session: {0}")]
    Connection(String),

    /// The log-table DDL was rejected (e.g. insufficient privilege).
    #[error("failed to ensure log table: {0}")]
    Schema(#[source] sqlx::Error),

    /// A statement from either dispatch mode failed at runtime.
    #[error("statement execution failed: {0}")]
    Execution(#[source] sqlx::Error),
}

impl DbError {
    /// The text surfaced verbatim in the failure response's `details` field.
    ///
    /// This is the underlying database error message, unsanitized by design:
    /// the response contract passes it through as-is.
    pub fn details(&self) -> String {
        match self {
            Self::Connection(msg) => msg.clone(),
            Self::Schema(err) | Self::Execution(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_details_pass_through() {
        let err = DbError::Connection("Access denied for user 'logger'".into());
        assert_eq!(err.details(), "Access denied for user 'logger'");
    }

    #[test]
    fn execution_details_come_from_the_source_error() {
        let err = DbError::Execution(sqlx::Error::RowNotFound);
        assert!(!err.details().is_empty());
        assert!(err.to_string().starts_with("statement execution failed"));
    }
}
