//! Default values shared by the document settings and the element renderers.

// ---------------------------------------------------------------------------
// Document settings
// ---------------------------------------------------------------------------

pub const BACKGROUND_COLOR: &str = "#f4f4f4";
pub const CONTENT_WIDTH: &str = "600px";
pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
pub const PADDING: &str = "20px";
pub const DOCUMENT_TITLE: &str = "Email";
pub const CONTENT_BACKGROUND: &str = "#ffffff";
pub const MOBILE_BREAKPOINT: &str = "600px";

// ---------------------------------------------------------------------------
// Element renderers
// ---------------------------------------------------------------------------

pub const TEXT_TAG: &str = "p";
pub const IMAGE_ALT: &str = "Image";
pub const BUTTON_HREF: &str = "#";
pub const BUTTON_LABEL: &str = "Click here";
pub const BUTTON_ALIGN: &str = "center";
pub const DIVIDER_STYLE: &str = "border:none;border-top:1px solid #e0e0e0;margin:20px 0";
pub const SPACER_HEIGHT: u32 = 20;
pub const SOCIAL_ICON_SIZE: u32 = 32;
pub const SOCIAL_SPACING: u32 = 10;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const DEFAULT_MAX_DEPTH: usize = 32;
