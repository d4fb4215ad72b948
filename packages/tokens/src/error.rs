use thiserror::Error;

pub type TokensResult<T> = Result<T, TokensError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokensError {
    #[error("Malformed variable data: {message}")]
    MalformedData { message: String },
}

impl TokensError {
    pub fn malformed(message: impl Into<String>) -> Self {
        TokensError::MalformedData {
            message: message.into(),
        }
    }
}
