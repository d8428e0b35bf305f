use thiserror::Error;

/// Errors raised while turning a template document into HTML or text.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Template is required")]
    MissingDocument,
    #[error("Template must have an elements array")]
    InvalidElements,
    #[error("Template must have at least one element")]
    EmptyElements,
    #[error("element nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
    #[error("template json invalid: {0}")]
    Json(#[from] serde_json::Error),
}
