pub type AsciimageResult<T> = Result<T, AsciimageError>;

/// The lenient parse path never produces these; a malformed grid degrades to an invalid
/// [`crate::Scene`] instead.
#[derive(thiserror::Error, Debug)]
pub enum AsciimageError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("style error: {0}")]
    Style(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AsciimageError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn style(msg: impl Into<String>) -> Self {
        Self::Style(msg.into())
    }
}
