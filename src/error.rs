use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No dishes match your dietary preferences and constraints")]
    NoMatchingDishes,

    #[error("Unknown diet type: {0}")]
    UnknownDiet(String),

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
