//! Style map -> inline CSS.

use crate::model::StyleMap;
use serde_json::Value;

/// Turns an element's style map into the value of an HTML `style` attribute.
pub trait StyleSerializer {
    fn serialize(&self, styles: &StyleMap) -> String;
}

/// Pass-through serializer: camelCase keys become kebab-case properties and
/// values are copied verbatim, without validation or escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineStyleSerializer;

impl StyleSerializer for InlineStyleSerializer {
    fn serialize(&self, styles: &StyleMap) -> String {
        styles
            .iter()
            .map(|(property, value)| format!("{}:{}", css_property(property), css_value(value)))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Serialize an arbitrary JSON value as inline CSS. Anything other than an
/// object serializes to an empty string.
pub fn serialize_styles(styles: Option<&Value>) -> String {
    styles
        .and_then(Value::as_object)
        .map(|styles| InlineStyleSerializer.serialize(styles))
        .unwrap_or_default()
}

/// `backgroundColor` -> `background-color`.
pub fn css_property(name: &str) -> String {
    let mut property = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            property.push('-');
            property.push(ch.to_ascii_lowercase());
        } else {
            property.push(ch);
        }
    }
    property
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Format a finite CSS number: integral values without a fraction, others
/// with at most two decimals.
pub(crate) fn css_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value}");
    }
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
