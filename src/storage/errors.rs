use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// MySQL error numbers for "deadlock found" and "lock wait timeout exceeded".
pub const MYSQL_TRANSIENT_ERRORS: [u16; 2] = [1213, 1205];

#[derive(Error, Debug)]
pub enum StorageError {
    /// Transient lock contention. The write-back pipeline retries these.
    #[error("Lock conflict: {0}")]
    Conflict(String),

    #[error("Storage failure: {0}")]
    Failure(String),

    #[error("SQL error: {0}")]
    Sqlx(sqlx::Error),
}

impl StorageError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        let transient = error
            .as_database_error()
            .and_then(|database_error| database_error.try_downcast_ref::<MySqlDatabaseError>())
            .map(|mysql_error| MYSQL_TRANSIENT_ERRORS.contains(&mysql_error.number()))
            .unwrap_or(false);
        if transient {
            StorageError::Conflict(error.to_string())
        } else {
            StorageError::Sqlx(error)
        }
    }
}
