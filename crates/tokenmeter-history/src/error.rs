/// Errors from the history and settings stores
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("no history record with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;
