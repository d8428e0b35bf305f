//! Email template renderer.
//!
//! Turns an editor template (a tree of typed, freely styled elements) into a
//! self-contained HTML document built from tables and inline styles, plus a
//! plain-text fallback for the `text/plain` part. Rendering is a pure
//! function of the template: no clocks, no I/O, no shared state.

pub mod blocks;
pub mod config;
pub mod context;
pub mod defaults;
pub mod errors;
pub mod layout;
pub mod model;
pub mod outcome;
pub mod plain_text;
pub mod renderer;
pub mod shell;
pub mod style;
pub mod validate;

pub use config::RenderLimits;
pub use context::RenderContext;
pub use errors::RendererError;
pub use model::{Document, Element, ElementKind, Settings, SocialLink, StyleMap};
pub use outcome::{EmailOutcome, HtmlOutcome, TextOutcome, ValidationOutcome};
pub use plain_text::{extract_text, extract_text_with_limits, render_text, render_text_with_limits};
pub use renderer::{ElementRenderer, EmailRenderer, render_element, render_element_value};
pub use shell::{render_email, render_email_with, render_html, render_html_with, wrap_document};
pub use style::{InlineStyleSerializer, StyleSerializer, css_property, serialize_styles};
pub use validate::validate_document;
