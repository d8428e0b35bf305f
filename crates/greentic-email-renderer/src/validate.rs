use crate::{errors::RendererError, outcome::ValidationOutcome};
use serde_json::Value;

/// Pre-flight shape check: the document is present and has a non-empty
/// `elements` array. The value is only inspected.
pub fn check(value: &Value) -> Result<(), RendererError> {
    if value.is_null() {
        return Err(RendererError::MissingDocument);
    }
    let elements = value
        .get("elements")
        .and_then(Value::as_array)
        .ok_or(RendererError::InvalidElements)?;
    if elements.is_empty() {
        return Err(RendererError::EmptyElements);
    }
    Ok(())
}

pub fn validate_document(value: &Value) -> ValidationOutcome {
    check(value).into()
}
