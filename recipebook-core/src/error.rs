use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recipe data: {0}")]
    Serialize(#[from] serde_json::Error),
}
