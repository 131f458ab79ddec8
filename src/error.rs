use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("language model error: {0}")]
    LanguageModel(String),
}

pub type AppResult<T> = Result<T, AppError>;
