use parley_db::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caught before the store is touched.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate key")]
    DuplicateKey,

    /// Login found no match. Deliberately does not say which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found")]
    NotFound,

    #[error("Not owner")]
    NotOwner,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApiError {
    /// Text for the blocking prompt shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::DuplicateKey => "Email already registered.".into(),
            Self::InvalidCredentials => "Invalid email or password.".into(),
            Self::NotFound => "That item no longer exists.".into(),
            Self::NotOwner => "You can only delete your own comments.".into(),
            Self::StoreUnavailable(_) => "Something went wrong. Please try again.".into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(_) => Self::DuplicateKey,
            StoreError::NotFound => Self::NotFound,
            StoreError::NotOwner => Self::NotOwner,
            StoreError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}
