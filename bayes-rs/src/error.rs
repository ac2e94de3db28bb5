use thiserror::Error;

#[derive(Error, Debug)]
pub enum BayesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Hash table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Statistical model not found: {0}")]
    MissingModel(String),

    #[error("Cannot read source: {0}")]
    Source(String),

    #[error("Model is empty: no messages trained in either corpus")]
    DivisionByZero,

    #[error("Config file error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BayesError>;
