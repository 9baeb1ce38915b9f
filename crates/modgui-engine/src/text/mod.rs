//! Font measurement collaborators.
//!
//! The widget tree never rasterizes glyphs; it only needs widths and line
//! heights to center and wrap strings before handing them to a renderer.

mod font_system;
mod metrics;

pub use font_system::{FontLoadError, FontSystem};
pub use metrics::{FixedWidthFont, FontMetrics};
