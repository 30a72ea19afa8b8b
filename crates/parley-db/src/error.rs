use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE or PRIMARY KEY constraint rejected the write.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Not found")]
    NotFound,

    #[error("Not the owner of this row")]
    NotOwner,

    /// The database file could not be opened or a statement failed to run.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == ErrorCode::ConstraintViolation
                    && (e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                        || e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY) =>
            {
                StoreError::DuplicateKey(msg.clone().unwrap_or_else(|| e.to_string()))
            }
            _ => StoreError::StoreUnavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: i32, msg: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), Some(msg.to_string()))
    }

    #[test]
    fn unique_violation_maps_to_duplicate_key() {
        let err = StoreError::from(sqlite_failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: auth_users.email",
        ));
        match err {
            StoreError::DuplicateKey(msg) => assert!(msg.contains("auth_users.email")),
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn not_null_violation_is_not_a_duplicate() {
        let err = StoreError::from(sqlite_failure(
            ffi::SQLITE_CONSTRAINT_NOTNULL,
            "NOT NULL constraint failed: comments.user",
        ));
        assert!(matches!(err, StoreError::StoreUnavailable(_)));
    }

    #[test]
    fn io_failure_maps_to_store_unavailable() {
        let err = StoreError::from(sqlite_failure(ffi::SQLITE_CANTOPEN, "unable to open database file"));
        assert!(matches!(err, StoreError::StoreUnavailable(_)));
    }
}
