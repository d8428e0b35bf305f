use std::env;

use crate::defaults::DEFAULT_MAX_DEPTH;

/// Environment variable that overrides the maximum element nesting depth.
pub const MAX_DEPTH_ENV: &str = "GREENTIC_EMAIL_RENDERER_MAX_DEPTH";

/// Bounds applied to a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_depth: usize,
}

impl RenderLimits {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse a depth limit string. Zero and non-numeric values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|depth| *depth > 0)
            .map(Self::new)
    }

    /// Reads the depth limit from `GREENTIC_EMAIL_RENDERER_MAX_DEPTH`.
    pub fn from_env() -> Self {
        env::var(MAX_DEPTH_ENV)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
