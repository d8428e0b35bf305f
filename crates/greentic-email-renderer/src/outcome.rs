use serde::{Deserialize, Serialize};

use crate::errors::RendererError;

/// Result envelope of an HTML render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HtmlOutcome {
    pub fn success(html: String) -> Self {
        Self {
            success: true,
            html: Some(html),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: &RendererError) -> Self {
        Self {
            success: false,
            html: None,
            message: Some("Failed to render email template".to_string()),
            error: Some(error.to_string()),
        }
    }
}

/// Result envelope of a plain-text extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TextOutcome {
    pub fn success(text: String) -> Self {
        Self {
            success: true,
            text: Some(text),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: &RendererError) -> Self {
        Self {
            success: false,
            text: None,
            message: Some("Failed to generate plain text".to_string()),
            error: Some(error.to_string()),
        }
    }
}

/// Both MIME parts of an email, or the reason they could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EmailOutcome {
    pub fn success(html: String, text: String) -> Self {
        Self {
            success: true,
            html: Some(html),
            text: Some(text),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: &RendererError) -> Self {
        Self {
            success: false,
            html: None,
            text: None,
            message: Some("Failed to render email".to_string()),
            error: Some(error.to_string()),
        }
    }
}

/// Result of the pre-flight document check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: &RendererError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<(), RendererError>> for ValidationOutcome {
    fn from(result: Result<(), RendererError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(err) => Self::invalid(&err),
        }
    }
}
