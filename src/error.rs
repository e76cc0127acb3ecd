use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacardError {
    #[error("notice '{0}' not found")]
    NoticeNotFound(String),

    #[error("ambiguous ID '{0}' matches multiple notices")]
    AmbiguousId(String),

    #[error("work '{0}' not found")]
    WorkNotFound(String),

    #[error("judge '{0}' not found")]
    JudgeNotFound(String),

    #[error("invalid notice format: {0}")]
    InvalidFormat(String),

    #[error("invalid score '{0}': must be an integer between 0 and 100")]
    InvalidScore(String),

    #[error("editor exited with status {0}")]
    EditorFailed(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlacardError>;
