//! Leaf element renderers: text blocks, images, buttons, dividers, spacers and
//! social icon rows.
//!
//! Content and attribute values are interpolated as-is. Templates may carry
//! raw HTML snippets in `content`.

use crate::{
    defaults,
    model::{Element, SocialLink},
    style::{StyleSerializer, css_number},
};

/// `<p>`, `<h1>`.. or any tag named by the element, wrapping its content.
pub fn render_text(element: &Element, styles: &dyn StyleSerializer) -> String {
    let tag = text_tag(element);
    let content = element.text(&["content", "text"]).unwrap_or_default();
    format!(
        "<{tag} style=\"{}\">{content}</{tag}>",
        styles.serialize(&element.styles)
    )
}

fn text_tag(element: &Element) -> String {
    if let Some(tag) = element.text(&["tag"]) {
        return tag;
    }
    match element.number(&["level"]) {
        Some(level) if (1.0..=6.0).contains(&level) && level.fract() == 0.0 => {
            format!("h{}", level as u8)
        }
        _ => defaults::TEXT_TAG.to_string(),
    }
}

pub fn render_image(element: &Element, styles: &dyn StyleSerializer) -> String {
    let src = element
        .text(&["src", "url", "imageUrl"])
        .unwrap_or_default();
    let alt = element
        .text(&["alt", "altText"])
        .unwrap_or_else(|| defaults::IMAGE_ALT.to_string());

    let mut img = format!("<img src=\"{src}\" alt=\"{alt}\"");
    if let Some(width) = element.text(&["width"]) {
        img.push_str(&format!(" width=\"{width}\""));
    }
    if let Some(height) = element.text(&["height"]) {
        img.push_str(&format!(" height=\"{height}\""));
    }
    img.push_str(&format!(
        " style=\"{}\" />",
        styles.serialize(&element.styles)
    ));

    match element.text(&["link", "href"]) {
        Some(link) => format!("<a href=\"{link}\" target=\"_blank\">{img}</a>"),
        None => img,
    }
}

/// Bulletproof button: a one-cell table carrying the style, with a block
/// anchor filling the cell so the whole surface stays clickable.
pub fn render_button(element: &Element, styles: &dyn StyleSerializer) -> String {
    let href = element
        .text(&["href", "url", "link"])
        .unwrap_or_else(|| defaults::BUTTON_HREF.to_string());
    let label = element
        .text(&["text", "content"])
        .unwrap_or_else(|| defaults::BUTTON_LABEL.to_string());
    let align = element
        .text(&["align"])
        .unwrap_or_else(|| defaults::BUTTON_ALIGN.to_string());

    let mut anchor_style = String::from("display:block;text-decoration:none");
    if let Some(color) = element.styles.get("color").and_then(|value| value.as_str()) {
        anchor_style.push_str(&format!(";color:{color}"));
    }

    format!(
        "<table role=\"presentation\" cellspacing=\"0\" cellpadding=\"0\" border=\"0\" align=\"{align}\">\
         <tr><td style=\"{}\">\
         <a href=\"{href}\" target=\"_blank\" style=\"{anchor_style}\">{label}</a>\
         </td></tr></table>",
        styles.serialize(&element.styles)
    )
}

pub fn render_divider(element: &Element, styles: &dyn StyleSerializer) -> String {
    let style = styles.serialize(&element.styles);
    let style = if style.is_empty() {
        defaults::DIVIDER_STYLE.to_string()
    } else {
        style
    };
    format!("<hr style=\"{style}\">")
}

/// Fixed-height gap. `line-height` and `font-size:0` stop clients from
/// inflating the row to their minimum line height.
pub fn render_spacer(element: &Element) -> String {
    let height = element
        .number(&["height", "size"])
        .map(css_number)
        .unwrap_or_else(|| defaults::SPACER_HEIGHT.to_string());
    format!("<div style=\"height:{height}px;line-height:{height}px;font-size:0\">&nbsp;</div>")
}

/// Row of linked icons. An element without links renders nothing.
pub fn render_social(element: &Element, styles: &dyn StyleSerializer) -> String {
    let links = element.social_links();
    if links.is_empty() {
        return String::new();
    }
    let icon_size = element
        .number(&["iconSize"])
        .map(css_number)
        .unwrap_or_else(|| defaults::SOCIAL_ICON_SIZE.to_string());
    let spacing = element
        .number(&["spacing"])
        .map(css_number)
        .unwrap_or_else(|| defaults::SOCIAL_SPACING.to_string());

    let cells: String = links
        .iter()
        .map(|link| social_cell(link, &icon_size, &spacing))
        .collect();

    format!(
        "<table role=\"presentation\" cellspacing=\"0\" cellpadding=\"0\" border=\"0\" align=\"center\" style=\"{}\"><tr>{cells}</tr></table>",
        styles.serialize(&element.styles)
    )
}

fn social_cell(link: &SocialLink, icon_size: &str, spacing: &str) -> String {
    let href = link.url.as_deref().unwrap_or(defaults::BUTTON_HREF);
    let platform = link.platform.as_deref().unwrap_or_default();
    let inner = match &link.icon {
        Some(icon) => format!(
            "<img src=\"{icon}\" alt=\"{platform}\" width=\"{icon_size}\" height=\"{icon_size}\" style=\"display:block;border:0\" />"
        ),
        None => platform.to_string(),
    };
    format!("<td style=\"padding:0 {spacing}px\"><a href=\"{href}\" target=\"_blank\">{inner}</a></td>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::InlineStyleSerializer;
    use serde_json::json;

    fn el(value: serde_json::Value) -> Element {
        Element::from_value(&value).expect("element")
    }

    #[test]
    fn text_uses_tag_and_content_fallbacks() {
        let html = render_text(
            &el(json!({"type": "heading", "tag": "h1", "text": "Hello", "styles": {"fontSize": "24px"}})),
            &InlineStyleSerializer,
        );
        assert_eq!(html, "<h1 style=\"font-size:24px\">Hello</h1>");

        let html = render_text(&el(json!({"type": "text"})), &InlineStyleSerializer);
        assert_eq!(html, "<p style=\"\"></p>");
    }

    #[test]
    fn text_level_selects_heading_tag() {
        let html = render_text(
            &el(json!({"type": "title", "level": 3, "content": "Sub"})),
            &InlineStyleSerializer,
        );
        assert_eq!(html, "<h3 style=\"\">Sub</h3>");
        let html = render_text(
            &el(json!({"type": "title", "level": 9, "content": "Sub"})),
            &InlineStyleSerializer,
        );
        assert!(html.starts_with("<p "));
    }

    #[test]
    fn content_is_not_escaped() {
        let html = render_text(
            &el(json!({"type": "text", "content": "<strong>bold</strong> & more"})),
            &InlineStyleSerializer,
        );
        assert!(html.contains("<strong>bold</strong> & more"));
    }

    #[test]
    fn image_defaults_and_optional_dimensions() {
        let html = render_image(&el(json!({"type": "image"})), &InlineStyleSerializer);
        assert_eq!(html, "<img src=\"\" alt=\"Image\" style=\"\" />");

        let html = render_image(
            &el(json!({"type": "image", "url": "https://cdn/a.png", "altText": "Logo", "width": 120})),
            &InlineStyleSerializer,
        );
        assert_eq!(
            html,
            "<img src=\"https://cdn/a.png\" alt=\"Logo\" width=\"120\" style=\"\" />"
        );
    }

    #[test]
    fn image_with_link_is_wrapped_in_anchor() {
        let html = render_image(
            &el(json!({"type": "image", "src": "a.png", "link": "https://example.com"})),
            &InlineStyleSerializer,
        );
        assert!(html.starts_with("<a href=\"https://example.com\" target=\"_blank\"><img "));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn button_defaults() {
        let html = render_button(&el(json!({"type": "button"})), &InlineStyleSerializer);
        assert!(html.starts_with("<table role=\"presentation\""));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains(">Click here</a>"));
        assert!(html.contains("display:block"));
        assert_eq!(html.matches("<td").count(), 1);
    }

    #[test]
    fn button_styles_cell_and_copies_color_to_anchor() {
        let html = render_button(
            &el(json!({
                "type": "button",
                "content": "Buy",
                "url": "https://shop",
                "styles": {"backgroundColor": "#0055ff", "color": "#ffffff"}
            })),
            &InlineStyleSerializer,
        );
        assert!(html.contains("<td style=\"background-color:#0055ff;color:#ffffff\">"));
        assert!(html.contains(
            "<a href=\"https://shop\" target=\"_blank\" style=\"display:block;text-decoration:none;color:#ffffff\">Buy</a>"
        ));
    }

    #[test]
    fn button_alignment_defaults_to_center() {
        let html = render_button(&el(json!({"type": "btn"})), &InlineStyleSerializer);
        assert!(html.contains("border=\"0\" align=\"center\"><tr>"));

        let html = render_button(
            &el(json!({"type": "button", "align": "left", "text": "Go"})),
            &InlineStyleSerializer,
        );
        assert!(html.contains("align=\"left\""));
        assert!(!html.contains("align=\"center\""));
    }

    #[test]
    fn divider_default_and_custom_style() {
        let html = render_divider(&el(json!({"type": "divider"})), &InlineStyleSerializer);
        assert_eq!(
            html,
            "<hr style=\"border:none;border-top:1px solid #e0e0e0;margin:20px 0\">"
        );
        let html = render_divider(
            &el(json!({"type": "divider", "styles": {"borderTop": "2px dashed red"}})),
            &InlineStyleSerializer,
        );
        assert_eq!(html, "<hr style=\"border-top:2px dashed red\">");
    }

    #[test]
    fn hr_alias_renders_default_divider() {
        let html = render_divider(&el(json!({"type": "hr"})), &InlineStyleSerializer);
        assert_eq!(
            html,
            "<hr style=\"border:none;border-top:1px solid #e0e0e0;margin:20px 0\">"
        );
    }

    #[test]
    fn spacer_sizes() {
        assert_eq!(
            render_spacer(&el(json!({"type": "spacer"}))),
            "<div style=\"height:20px;line-height:20px;font-size:0\">&nbsp;</div>"
        );
        assert!(render_spacer(&el(json!({"type": "spacer", "size": 48}))).contains("height:48px"));
        assert!(
            render_spacer(&el(json!({"type": "spacer", "height": "12px"})))
                .contains("line-height:12px")
        );
    }

    #[test]
    fn spacer_keeps_large_heights_and_drops_unusable_ones() {
        assert!(
            render_spacer(&el(json!({"type": "spacer", "height": 1e20})))
                .contains("height:100000000000000000000px;")
        );
        assert_eq!(
            render_spacer(&el(json!({"type": "spacer", "height": "1e400px"}))),
            "<div style=\"height:20px;line-height:20px;font-size:0\">&nbsp;</div>"
        );
    }

    #[test]
    fn social_spacing_sets_cell_padding() {
        let html = render_social(
            &el(json!({
                "type": "social",
                "spacing": "6px",
                "links": [
                    {"url": "https://x.example", "icon": "x.png"},
                    {"url": "https://gh.example", "icon": "gh.png"}
                ]
            })),
            &InlineStyleSerializer,
        );
        assert_eq!(html.matches("<td style=\"padding:0 6px\">").count(), 2);
        assert!(!html.contains("padding:0 10px"));
    }

    #[test]
    fn social_without_links_renders_nothing() {
        assert_eq!(
            render_social(&el(json!({"type": "social"})), &InlineStyleSerializer),
            ""
        );
        assert_eq!(
            render_social(&el(json!({"type": "social", "links": []})), &InlineStyleSerializer),
            ""
        );
    }

    #[test]
    fn social_renders_one_cell_per_link() {
        let html = render_social(
            &el(json!({
                "type": "social",
                "iconSize": 24,
                "links": [
                    {"url": "https://x.example", "icon": "x.png", "platform": "X"},
                    {"url": "https://gh.example", "iconUrl": "gh.png", "name": "GitHub"}
                ]
            })),
            &InlineStyleSerializer,
        );
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<td style=\"padding:0 10px\">").count(), 2);
        assert!(html.contains(
            "<a href=\"https://x.example\" target=\"_blank\"><img src=\"x.png\" alt=\"X\" width=\"24\" height=\"24\""
        ));
        assert!(html.find("x.png") < html.find("gh.png"));
    }
}
