use crate::coords::RectF;
use crate::paint::{Argb, Paint};

use super::{Renderer, TexCoords};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        rect: RectF,
        depth: f64,
        paint: Paint,
    },
    Textured {
        rect: RectF,
        uv: TexCoords,
        depth: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: Argb,
        shadow: bool,
        depth: f64,
    },
    Tooltip {
        lines: Vec<String>,
        x: i32,
        y: i32,
        depth: f64,
    },
}

impl DrawCmd {
    #[inline]
    pub fn depth(&self) -> f64 {
        match self {
            DrawCmd::Fill { depth, .. }
            | DrawCmd::Textured { depth, .. }
            | DrawCmd::Text { depth, .. }
            | DrawCmd::Tooltip { depth, .. } => *depth,
        }
    }
}

/// Recorded draw stream for a frame, in submission order.
///
/// `push` is O(1); `clear` keeps allocated capacity for reuse.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Text of every `Text` command, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for DrawList {
    fn fill_rect(&mut self, rect: RectF, depth: f64, paint: &Paint) {
        self.push(DrawCmd::Fill { rect, depth, paint: *paint });
    }

    fn textured_quad(&mut self, rect: RectF, uv: TexCoords, depth: f64) {
        self.push(DrawCmd::Textured { rect, uv, depth });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Argb, shadow: bool, depth: f64) {
        self.push(DrawCmd::Text { text: text.to_string(), x, y, color, shadow, depth });
    }

    fn draw_tooltip(
        &mut self,
        lines: &[String],
        x: i32,
        y: i32,
        _screen_width: i32,
        _screen_height: i32,
        depth: f64,
    ) {
        self.push(DrawCmd::Tooltip { lines: lines.to_vec(), x, y, depth });
    }
}
