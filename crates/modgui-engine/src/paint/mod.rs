//! Paint model shared between the widget tree and renderers.
//!
//! Scope:
//! - packed ARGB colors as used by the host engine
//! - fill sources (solid, vertical gradient)

pub mod color;

pub use color::Argb;

/// Fill source for [`crate::render::Renderer::fill_rect`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Paint {
    Solid(Argb),
    /// Interpolates from `top` at the upper edge to `bottom` at the lower edge.
    VerticalGradient { top: Argb, bottom: Argb },
}

impl Paint {
    #[inline]
    pub fn solid(color: impl Into<Argb>) -> Self {
        Paint::Solid(color.into())
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a() == 0xFF,
            Paint::VerticalGradient { top, bottom } => top.a() == 0xFF && bottom.a() == 0xFF,
        }
    }
}
