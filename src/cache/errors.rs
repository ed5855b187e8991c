use thiserror::Error;
use crate::storage::errors::StorageError;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Loading from storage failed: {0}")]
    IoError(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let error = CacheError::IoError(StorageError::Failure("connection reset".to_string()));
        assert_eq!(format!("{}", error), "Loading from storage failed: Storage failure: connection reset");
    }

    #[test]
    fn test_error_debug() {
        let error = CacheError::from(StorageError::Conflict("deadlock".to_string()));
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("IoError"));
        assert!(debug_str.contains("deadlock"));
    }
}
