pub type OvermarkResult<T> = Result<T, OvermarkError>;

#[derive(thiserror::Error, Debug)]
pub enum OvermarkError {
    #[error("color error: {0}")]
    Color(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OvermarkError {
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
