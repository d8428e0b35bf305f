//! Template -> text/plain fallback.
//!
//! Walks the element tree depth-first, collecting text blocks and button
//! links. This is a best-effort companion part for multipart email, not an
//! inverse of the HTML render.

use crate::{
    config::RenderLimits,
    context::RenderContext,
    defaults,
    errors::RendererError,
    model::{Document, Element, ElementKind},
    outcome::TextOutcome,
};
use serde_json::Value;

/// Extract the plain-text body of a document.
pub fn extract_text(document: &Document) -> Result<String, RendererError> {
    extract_text_with_limits(document, RenderLimits::default())
}

pub fn extract_text_with_limits(
    document: &Document,
    limits: RenderLimits,
) -> Result<String, RendererError> {
    let mut parts: Vec<String> = Vec::new();
    collect_elements(&document.elements, &RenderContext::new(limits), &mut parts)?;
    Ok(parts.join("\n\n"))
}

/// Extract plain text from editor JSON into the text envelope.
pub fn render_text(value: &Value) -> TextOutcome {
    render_text_with_limits(value, RenderLimits::default())
}

pub fn render_text_with_limits(value: &Value, limits: RenderLimits) -> TextOutcome {
    let extracted = Document::from_value_with_limits(value, limits)
        .and_then(|document| extract_text_with_limits(&document, limits));
    match extracted {
        Ok(text) => TextOutcome::success(text),
        Err(err) => {
            tracing::error!(error = %err, "plain text extraction failed");
            TextOutcome::failure(&err)
        }
    }
}

fn collect_elements(
    elements: &[Element],
    ctx: &RenderContext,
    parts: &mut Vec<String>,
) -> Result<(), RendererError> {
    for element in elements {
        // Columns resolve their cells exactly as the HTML columns renderer does.
        if element.kind == Some(ElementKind::Columns) {
            let columns = element
                .columns
                .as_deref()
                .or(element.children.as_deref())
                .unwrap_or_default();
            collect_columns(columns, ctx, parts)?;
            continue;
        }
        // Layout nodes contribute their children, never their own fields.
        if let Some(children) = &element.children {
            collect_elements(children, &ctx.descend()?, parts)?;
            continue;
        }
        if let Some(columns) = &element.columns {
            collect_columns(columns, ctx, parts)?;
            continue;
        }

        let fragment = match &element.kind {
            Some(ElementKind::Text | ElementKind::Heading | ElementKind::Paragraph) => {
                element.text(&["content", "text"])
            }
            Some(ElementKind::Button) => Some(button_line(element)),
            _ => None,
        };
        if let Some(fragment) = fragment {
            let trimmed = fragment.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
    Ok(())
}

fn collect_columns(
    columns: &[Element],
    ctx: &RenderContext,
    parts: &mut Vec<String>,
) -> Result<(), RendererError> {
    let column_ctx = ctx.descend()?;
    for column in columns {
        match &column.children {
            Some(children) => collect_elements(children, &column_ctx.descend()?, parts)?,
            None => collect_elements(std::slice::from_ref(column), &column_ctx, parts)?,
        }
    }
    Ok(())
}

fn button_line(element: &Element) -> String {
    let label = element
        .text(&["text", "content"])
        .unwrap_or_else(|| defaults::BUTTON_LABEL.to_string());
    let href = element
        .text(&["href", "url", "link"])
        .unwrap_or_else(|| defaults::BUTTON_HREF.to_string());
    format!("{label} - {href}")
}
