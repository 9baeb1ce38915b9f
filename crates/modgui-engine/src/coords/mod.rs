//! Geometry shared between the widget tree and renderers.
//!
//! GUI space:
//! - Integer "virtual" pixels as reported by [`crate::host::Host::screen_width`]
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers receive [`RectF`] so helpers can express half-pixel strokes and
//! scaled texture quads without rounding.

mod rect;
mod rect_f;

pub use rect::Rect;
pub use rect_f::RectF;
