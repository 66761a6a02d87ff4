use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickDialError {
    #[error("Invalid contact: {0}")]
    Validation(String),

    #[error("CSV must contain 'name', 'phone', and 'category' columns (missing: {})", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Index {index} is out of range (store has {len} contacts)")]
    Index { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuickDialError>;
