use thiserror::Error;

use crate::profile::UserId;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading the `--values` file or writing a status line failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The `--values` file is not a JSON object of profile fields
    #[error("invalid values file: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// The `--confirm` yes/no prompt could not be shown or read (no TTY, Ctrl-C)
    #[error("confirmation prompt failed: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Connection, authentication or query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Error during input validation
    #[error("validation error: {0}")]
    Validation(String),
    /// No user row matches the target email
    #[error("User not found with email: {0}")]
    UserNotFound(String),
    /// The update touched no profile row for the user
    #[error("no profile row for user ID {0}")]
    ProfileNotFound(UserId),
    /// Operator declined the confirmation prompt
    #[error("aborted by operator, nothing was written")]
    Aborted,
}

pub type AppResult<T> = Result<T, AppError>;
