use crate::{
    blocks,
    config::RenderLimits,
    context::RenderContext,
    errors::RendererError,
    layout,
    model::{Element, ElementKind},
    style::{InlineStyleSerializer, StyleSerializer},
};
use serde_json::Value;

/// Trait describing a renderer that turns one element (and its subtree) into markup.
pub trait ElementRenderer {
    fn render_node(&self, element: &Element, ctx: &RenderContext) -> Result<String, RendererError>;

    fn styles(&self) -> &dyn StyleSerializer;
}

/// Email-safe element renderer, parameterized by the style serializer.
#[derive(Debug, Clone)]
pub struct EmailRenderer<S = InlineStyleSerializer> {
    serializer: S,
    limits: RenderLimits,
}

impl Default for EmailRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailRenderer {
    pub fn new() -> Self {
        Self::with_serializer(InlineStyleSerializer)
    }

    /// Renderer whose depth limit comes from `GREENTIC_EMAIL_RENDERER_MAX_DEPTH`.
    pub fn from_env() -> Self {
        Self::new().with_limits(RenderLimits::from_env())
    }
}

impl<S: StyleSerializer> EmailRenderer<S> {
    pub fn with_serializer(serializer: S) -> Self {
        Self {
            serializer,
            limits: RenderLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: RenderLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> RenderLimits {
        self.limits
    }

    pub(crate) fn root_context(&self) -> RenderContext {
        RenderContext::new(self.limits)
    }

    /// Render one element as a top-level node.
    pub fn try_render(&self, element: &Element) -> Result<String, RendererError> {
        self.render_node(element, &self.root_context())
    }

    /// Render one element, degrading to an empty string on failure.
    pub fn render(&self, element: &Element) -> String {
        self.try_render(element).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "element render failed, skipping");
            String::new()
        })
    }

    /// Render a sequence of top-level elements in order.
    pub fn render_all(&self, elements: &[Element]) -> Result<String, RendererError> {
        let ctx = self.root_context();
        elements
            .iter()
            .map(|element| self.render_node(element, &ctx))
            .collect()
    }
}

impl<S: StyleSerializer> ElementRenderer for EmailRenderer<S> {
    fn render_node(&self, element: &Element, ctx: &RenderContext) -> Result<String, RendererError> {
        let Some(kind) = &element.kind else {
            tracing::warn!(depth = ctx.depth, "element has no type, skipping");
            return Ok(String::new());
        };
        let styles = self.styles();
        let html = match kind {
            ElementKind::Text
            | ElementKind::Heading
            | ElementKind::Paragraph
            | ElementKind::Title => blocks::render_text(element, styles),
            ElementKind::Image => blocks::render_image(element, styles),
            ElementKind::Button => blocks::render_button(element, styles),
            ElementKind::Divider => blocks::render_divider(element, styles),
            ElementKind::Spacer => blocks::render_spacer(element),
            ElementKind::Social => blocks::render_social(element, styles),
            ElementKind::Container => layout::render_container(self, element, ctx)?,
            ElementKind::Columns => layout::render_columns(self, element, ctx)?,
            ElementKind::Other(name) if element.has_children() => {
                tracing::debug!(
                    element_type = %name,
                    "unknown element type, rendering as container"
                );
                layout::render_container(self, element, ctx)?
            }
            ElementKind::Other(name) => {
                tracing::debug!(element_type = %name, "unknown element type, skipping");
                String::new()
            }
        };
        Ok(html)
    }

    fn styles(&self) -> &dyn StyleSerializer {
        &self.serializer
    }
}

/// Convenience helper that renders one element with the default renderer.
pub fn render_element(element: &Element) -> String {
    EmailRenderer::new().render(element)
}

/// Same as [`render_element`], starting from editor JSON.
pub fn render_element_value(value: &Value) -> String {
    match Element::from_value(value) {
        Ok(element) => render_element(&element),
        Err(err) => {
            tracing::warn!(error = %err, "element conversion failed, skipping");
            String::new()
        }
    }
}
