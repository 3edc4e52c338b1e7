#[derive(Debug, thiserror::Error)]
pub enum CardBotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error, can't extract card name from input: {0}")]
    InputMissing(String),

    #[error("Error, didnt find any card with the name: {0}")]
    NoCardsFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CardBotError>;
