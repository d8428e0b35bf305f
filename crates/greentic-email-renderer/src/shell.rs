//! Document assembly: wraps rendered elements in a complete, email-safe HTML
//! document and exposes the envelope-returning entry points.

use crate::{
    defaults,
    errors::RendererError,
    model::{Document, Settings},
    outcome::{EmailOutcome, HtmlOutcome},
    plain_text,
    renderer::EmailRenderer,
    style::StyleSerializer,
    validate,
};
use serde_json::Value;

impl<S: StyleSerializer> EmailRenderer<S> {
    /// Render a whole document. Either the complete HTML is returned or an
    /// error; partial output never escapes.
    pub fn render_document(&self, document: &Document) -> Result<String, RendererError> {
        let body = self.render_all(&document.elements)?;
        Ok(wrap_document(document.title(), &document.settings, &body))
    }
}

/// Render editor JSON into the HTML envelope.
pub fn render_html(value: &Value) -> HtmlOutcome {
    render_html_with(&EmailRenderer::new(), value)
}

pub fn render_html_with<S: StyleSerializer>(
    renderer: &EmailRenderer<S>,
    value: &Value,
) -> HtmlOutcome {
    let rendered = Document::from_value_with_limits(value, renderer.limits())
        .and_then(|document| renderer.render_document(&document));
    match rendered {
        Ok(html) => HtmlOutcome::success(html),
        Err(err) => {
            tracing::error!(error = %err, "email template render failed");
            HtmlOutcome::failure(&err)
        }
    }
}

/// Validate, then render both the HTML part and the plain-text part.
pub fn render_email(value: &Value) -> EmailOutcome {
    render_email_with(&EmailRenderer::new(), value)
}

pub fn render_email_with<S: StyleSerializer>(
    renderer: &EmailRenderer<S>,
    value: &Value,
) -> EmailOutcome {
    let rendered = validate::check(value)
        .and_then(|()| Document::from_value_with_limits(value, renderer.limits()))
        .and_then(|document| {
            let html = renderer.render_document(&document)?;
            let text = plain_text::extract_text_with_limits(&document, renderer.limits())?;
            Ok((html, text))
        });
    match rendered {
        Ok((html, text)) => EmailOutcome::success(html, text),
        Err(err) => {
            tracing::error!(error = %err, "email render failed");
            EmailOutcome::failure(&err)
        }
    }
}

/// The fixed document shell. Tables carry the layout; the conditional block
/// pins Outlook to 96 DPI so images are not rescaled on high-DPI displays.
pub fn wrap_document(title: &str, settings: &Settings, body: &str) -> String {
    let Settings {
        background_color,
        content_width,
        font_family,
        padding,
    } = settings;
    let content_background = defaults::CONTENT_BACKGROUND;
    let breakpoint = defaults::MOBILE_BREAKPOINT;

    format!(
        r#"<!DOCTYPE html>
<html lang="en" xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="x-apple-disable-message-reformatting">
<title>{title}</title>
<!--[if mso]>
<noscript>
<xml>
<o:OfficeDocumentSettings>
<o:AllowPNG/>
<o:PixelsPerInch>96</o:PixelsPerInch>
</o:OfficeDocumentSettings>
</xml>
</noscript>
<![endif]-->
<style>
body {{ margin: 0; padding: 0; width: 100% !important; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }}
table, td {{ border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }}
img {{ border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }}
@media screen and (max-width: {breakpoint}) {{
.email-container {{ width: 100% !important; max-width: 100% !important; }}
}}
</style>
</head>
<body style="margin:0;padding:0;background-color:{background_color};font-family:{font_family};">
<table role="presentation" width="100%" cellspacing="0" cellpadding="0" border="0" style="background-color:{background_color};">
<tr>
<td align="center" style="padding:{padding};">
<table role="presentation" class="email-container" align="center" cellspacing="0" cellpadding="0" border="0" style="width:{content_width};max-width:{content_width};">
<tr>
<td style="background-color:{content_background};padding:{padding};font-family:{font_family};">
{body}
</td>
</tr>
</table>
</td>
</tr>
</table>
</body>
</html>"#
    )
}
