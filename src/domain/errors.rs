//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use sea_orm::SqlErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Input rejected before or by the store (missing field, bad format, dangling reference)
    #[error("Validation error: {0}")]
    Validation(String),
    /// A uniqueness constraint was violated
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Validation(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_are_database_errors() {
        let err = DomainError::from(sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection refused".to_string(),
        )));
        assert!(matches!(err, DomainError::Database(ref msg) if msg.contains("connection refused")));
    }

    #[test]
    fn display_includes_detail() {
        let err = DomainError::Validation("email is required".to_string());
        assert_eq!(err.to_string(), "Validation error: email is required");
    }
}
