use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MenuError {
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("translation API answered with status {0}")]
    Status(u16),
    #[error("translation API returned no text")]
    EmptyResponse,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown restaurant '{0}'")]
pub struct UnknownRestaurant(pub String);
