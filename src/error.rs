use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
