use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write {key:?} to local storage: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to remove {key:?} from local storage: {reason}")]
    Remove { key: String, reason: String },
    #[error("Failed to serialize session user: {0}")]
    Serialize(#[from] serde_json::Error),
}
