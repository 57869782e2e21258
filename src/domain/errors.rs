//! Domain errors for the Rotaguard rota system.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors that can occur in the Rotaguard system.
#[derive(Debug, Error)]
pub enum RotaError {
    #[error("Week start {0} is not a Sunday")]
    InvalidWeekStart(NaiveDate),

    #[error("A rotation already exists for the week starting {0}")]
    WeekAlreadyExists(NaiveDate),

    #[error("No rotation found for the week starting {0}")]
    RotationNotFound(NaiveDate),

    #[error("Officer not found: {0}")]
    OfficerNotFound(Uuid),

    #[error("An officer named '{0}' already exists")]
    DuplicateOfficerName(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type RotaResult<T> = Result<T, RotaError>;

impl From<sqlx::Error> for RotaError {
    fn from(err: sqlx::Error) -> Self {
        RotaError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for RotaError {
    fn from(err: serde_json::Error) -> Self {
        RotaError::SerializationError(err.to_string())
    }
}
