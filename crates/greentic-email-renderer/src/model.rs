//! Template document model.
//!
//! The editor stores templates as loosely-typed JSON. Conversion into these
//! types happens once, at the boundary: element types are lower-cased and
//! alias-resolved into [`ElementKind`], style maps keep their key order, and
//! every type-specific field stays available through the lookup helpers on
//! [`Element`]. Conversion is bounded by the same depth limit as rendering.

use crate::{config::RenderLimits, context::RenderContext, defaults, errors::RendererError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys parsed into dedicated [`Element`] fields and not kept in the raw map.
const STRUCTURAL_KEYS: [&str; 4] = ["styles", "children", "elements", "columns"];

/// Open CSS property map, in insertion order. Values are never inspected.
pub type StyleMap = Map<String, Value>;

/// Global presentation settings of a template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_content_width")]
    pub content_width: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_padding")]
    pub padding: String,
}

fn default_background_color() -> String {
    defaults::BACKGROUND_COLOR.to_string()
}

fn default_content_width() -> String {
    defaults::CONTENT_WIDTH.to_string()
}

fn default_font_family() -> String {
    defaults::FONT_FAMILY.to_string()
}

fn default_padding() -> String {
    defaults::PADDING.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            content_width: default_content_width(),
            font_family: default_font_family(),
            padding: default_padding(),
        }
    }
}

impl Settings {
    /// Resolve editor settings against the defaults. Missing, empty, or
    /// non-string values fall back field by field.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(fields) = value.and_then(Value::as_object) else {
            return Self::default();
        };
        let pick = |key: &str, fallback: fn() -> String| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_else(fallback)
        };
        Self {
            background_color: pick("backgroundColor", default_background_color),
            content_width: pick("contentWidth", default_content_width),
            font_family: pick("fontFamily", default_font_family),
            padding: pick("padding", default_padding),
        }
    }
}

/// Canonical element tag after alias resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Heading,
    Paragraph,
    Title,
    Image,
    Button,
    Divider,
    Spacer,
    Social,
    Container,
    Columns,
    Other(String),
}

impl ElementKind {
    /// Parse an element type string (case-insensitive), resolving aliases.
    /// Blank strings carry no type at all.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "" => return None,
            "text" => Self::Text,
            "heading" => Self::Heading,
            "paragraph" => Self::Paragraph,
            "title" => Self::Title,
            "image" | "img" => Self::Image,
            "button" | "btn" => Self::Button,
            "divider" | "hr" => Self::Divider,
            "spacer" => Self::Spacer,
            "social" => Self::Social,
            "container" | "section" | "box" => Self::Container,
            "columns" | "column" | "grid" => Self::Columns,
            _ => Self::Other(normalized),
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Title => "title",
            Self::Image => "image",
            Self::Button => "button",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Social => "social",
            Self::Container => "container",
            Self::Columns => "columns",
            Self::Other(name) => name.as_str(),
        }
    }
}

/// One entry of a social element's link list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: Option<String>,
    pub icon: Option<String>,
    pub platform: Option<String>,
}

impl SocialLink {
    fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let link = Self {
            url: first_text(fields, &["url", "href"]),
            icon: first_text(fields, &["icon", "iconUrl"]),
            platform: first_text(fields, &["platform", "name"]),
        };
        if link.url.is_none() && link.icon.is_none() {
            return None;
        }
        Some(link)
    }
}

/// A node of the template tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// `None` when the node carries no usable `type`.
    pub kind: Option<ElementKind>,
    pub styles: StyleMap,
    /// `children`, or `elements` when `children` is absent.
    pub children: Option<Vec<Element>>,
    pub columns: Option<Vec<Element>>,
    fields: Map<String, Value>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), Value::String(value.into()));
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_columns(mut self, columns: Vec<Element>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Build an element from editor JSON with the default depth limit.
    ///
    /// Anything that is not an object with a non-blank string `type` becomes an
    /// element without a kind. The only failure is nesting past the limit.
    pub fn from_value(value: &Value) -> Result<Self, RendererError> {
        Self::from_value_with_limits(value, RenderLimits::default())
    }

    pub fn from_value_with_limits(
        value: &Value,
        limits: RenderLimits,
    ) -> Result<Self, RendererError> {
        Self::convert(value, &RenderContext::new(limits))
    }

    fn convert(value: &Value, ctx: &RenderContext) -> Result<Self, RendererError> {
        let Some(fields) = value.as_object() else {
            return Ok(Self::default());
        };
        let kind = fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(ElementKind::parse);
        let styles = fields
            .get("styles")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let children = match nested(fields, "children").or_else(|| nested(fields, "elements")) {
            Some(items) => Some(convert_list(items, ctx)?),
            None => None,
        };
        let columns = nested(fields, "columns")
            .map(|items| convert_list(items, ctx))
            .transpose()?;
        let fields = fields
            .iter()
            .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Self {
            kind,
            styles,
            children,
            columns,
            fields,
        })
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// First non-empty text value among `keys`. Numbers count as text.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        first_text(&self.fields, keys)
    }

    /// First finite numeric value among `keys`; accepts `24`, `"24"` and `"24px"`.
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|value| {
                let number = match value {
                    Value::Number(number) => number.as_f64(),
                    Value::String(text) => {
                        text.trim().trim_end_matches("px").trim().parse::<f64>().ok()
                    }
                    _ => None,
                };
                number.filter(|number| number.is_finite())
            })
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        ["links", "socialLinks"]
            .iter()
            .filter_map(|key| self.fields.get(*key).and_then(Value::as_array))
            .find(|links| !links.is_empty())
            .map(|links| links.iter().filter_map(SocialLink::from_value).collect())
            .unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

/// A complete email template.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub name: String,
    pub elements: Vec<Element>,
    pub settings: Settings,
}

impl Document {
    /// Build a document from editor JSON with the default depth limit. Fails
    /// when the value is absent, `elements` is not an array, or the tree nests
    /// too deeply.
    pub fn from_value(value: &Value) -> Result<Self, RendererError> {
        Self::from_value_with_limits(value, RenderLimits::default())
    }

    pub fn from_value_with_limits(
        value: &Value,
        limits: RenderLimits,
    ) -> Result<Self, RendererError> {
        if value.is_null() {
            return Err(RendererError::MissingDocument);
        }
        let elements = value
            .get("elements")
            .and_then(Value::as_array)
            .ok_or(RendererError::InvalidElements)?;
        let root = RenderContext::new(limits);
        Ok(Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            elements: elements
                .iter()
                .map(|element| Element::convert(element, &root))
                .collect::<Result<_, _>>()?,
            settings: Settings::from_value(value.get("settings")),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, RendererError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Title used for the HTML `<title>` element.
    pub fn title(&self) -> &str {
        if self.name.trim().is_empty() {
            defaults::DOCUMENT_TITLE
        } else {
            &self.name
        }
    }
}

fn nested<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a [Value]> {
    fields.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

/// Children sit one level below their parent, as they do when rendered.
fn convert_list(items: &[Value], ctx: &RenderContext) -> Result<Vec<Element>, RendererError> {
    let child_ctx = ctx.descend()?;
    items
        .iter()
        .map(|item| Element::convert(item, &child_ctx))
        .collect()
}

fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
}
