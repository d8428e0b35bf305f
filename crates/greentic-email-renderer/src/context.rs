use crate::{config::RenderLimits, errors::RendererError};

/// Per-call state threaded through the recursive element walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
    pub limits: RenderLimits,
}

impl RenderContext {
    pub fn new(limits: RenderLimits) -> Self {
        Self { depth: 0, limits }
    }

    /// Context for the children of the current element.
    pub fn descend(&self) -> Result<Self, RendererError> {
        let depth = self.depth + 1;
        if depth > self.limits.max_depth {
            return Err(RendererError::DepthExceeded {
                max: self.limits.max_depth,
            });
        }
        Ok(Self {
            depth,
            limits: self.limits,
        })
    }
}
