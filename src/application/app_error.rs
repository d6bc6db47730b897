use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Email domain is invalid or cannot receive emails")]
    DomainCannotReceiveMail,

    #[error("Invalid email domain (fake/unreachable)")]
    DomainUnreachable,

    #[error("Email already on waitlist")]
    AlreadyOnWaitlist,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Timed out during {0}")]
    Timeout(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::EmailRequired
                | AppError::InvalidEmailFormat
                | AppError::DomainCannotReceiveMail
                | AppError::DomainUnreachable
                | AppError::AlreadyOnWaitlist
                | AppError::InvalidBody
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
