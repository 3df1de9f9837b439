use thiserror::Error;

#[derive(Debug, Error)]
pub enum RationError {
    #[error("Unsupported weight unit: {0}")]
    UnsupportedWeightUnit(String),

    #[error("Moisture must be below 100%, got {0}")]
    InvalidMoisture(f64),

    #[error("Unknown item type: {0}")]
    UnknownItemKind(String),

    #[error("Activity level must be 1, 2, or 3, got {0}")]
    InvalidActivity(u8),

    #[error("No items to solve for")]
    NoItems,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, RationError>;
