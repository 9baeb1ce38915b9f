//! Rendering collaborator.
//!
//! The widget tree describes what to draw through [`Renderer`]; it never
//! touches a graphics pipeline itself. Engines implement the trait on top of
//! their immediate-mode draw calls. [`DrawList`] records the stream instead,
//! which is what headless hosts and tests use.

mod list;

pub use list::{DrawCmd, DrawList};

use crate::coords::RectF;
use crate::paint::{Argb, Paint};

/// Normalized texture coordinates of a quad.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TexCoords {
    pub min_u: f64,
    pub min_v: f64,
    pub max_u: f64,
    pub max_v: f64,
}

impl TexCoords {
    #[inline]
    pub const fn new(min_u: f64, min_v: f64, max_u: f64, max_v: f64) -> Self {
        Self { min_u, min_v, max_u, max_v }
    }
}

/// A region of a texture atlas, already in normalized coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sprite {
    pub min_u: f32,
    pub max_u: f32,
    pub min_v: f32,
    pub max_v: f32,
}

impl Sprite {
    #[inline]
    pub fn tex_coords(self) -> TexCoords {
        TexCoords::new(
            self.min_u as f64,
            self.min_v as f64,
            self.max_u as f64,
            self.max_v as f64,
        )
    }
}

/// Immediate-mode draw primitives.
///
/// All coordinates are GUI pixels; `depth` is the absolute render depth the
/// primitive is emitted at. Calls are fire-and-forget: no return value, no
/// error.
pub trait Renderer {
    /// Fills `rect` with a solid color or a vertical gradient.
    fn fill_rect(&mut self, rect: RectF, depth: f64, paint: &Paint);

    /// Draws a quad sampling the currently bound texture at `uv`.
    fn textured_quad(&mut self, rect: RectF, uv: TexCoords, depth: f64);

    /// Draws a single line of text with its top-left at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Argb, shadow: bool, depth: f64);

    /// Draws a hovering tooltip box near `(x, y)`, kept inside the screen.
    fn draw_tooltip(
        &mut self,
        lines: &[String],
        x: i32,
        y: i32,
        screen_width: i32,
        screen_height: i32,
        depth: f64,
    );
}
