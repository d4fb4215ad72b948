use storefront_tokens::TokensError;
use thiserror::Error;

pub type FigmaResult<T> = Result<T, FigmaError>;

#[derive(Error, Debug)]
pub enum FigmaError {
    #[error("No fileKey provided")]
    MissingFileKey,

    #[error("Invalid fileKey: {file_key}")]
    InvalidFileKey { file_key: String },

    #[error("Figma access token not configured")]
    Configuration,

    #[error("Figma API error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("Figma API request failed: {message}")]
    Transport { message: String },

    #[error("Malformed variable data: {message}")]
    MalformedData { message: String },

    #[error(transparent)]
    Tokens(#[from] TokensError),
}

impl FigmaError {
    /// Errors caused by the caller's input rather than by configuration or upstream
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FigmaError::MissingFileKey | FigmaError::InvalidFileKey { .. }
        )
    }
}
