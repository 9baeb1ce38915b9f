use modgui_engine::coords::RectF;
use modgui_engine::host::Host;
use modgui_engine::paint::{Argb, Paint};
use modgui_engine::render::{Renderer, Sprite, TexCoords};
use modgui_engine::text::FontMetrics;

/// Depth offset applied to tooltips so they sit above regular content.
pub const TOOLTIP_DEPTH_OFFSET: f64 = -300.0;

/// UV scale of the default 256×256 GUI texture.
const GUI_TEXEL: f64 = 1.0 / 256.0;

/// Drawing surface passed to [`crate::behavior::Behavior::render`].
///
/// Wraps the host's [`Renderer`] with the element's render depth already
/// applied, and adds the composite helpers GUI code keeps reaching for
/// (lines, borders, centered and wrapped text).
pub struct Painter<'a> {
    renderer: &'a mut dyn Renderer,
    host: &'a dyn Host,
    depth: f64,
}

impl<'a> Painter<'a> {
    pub fn new(renderer: &'a mut dyn Renderer, host: &'a dyn Host, depth: f64) -> Self {
        Self { renderer, host, depth }
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    #[inline]
    pub fn font(&self) -> &dyn FontMetrics {
        self.host.font()
    }

    // ── rects ─────────────────────────────────────────────────────────────

    /// One pixel tall line covering `start_x..=end_x`; the ends may be given in
    /// either order.
    pub fn draw_horizontal_line(&mut self, start_x: f64, end_x: f64, y: f64, color: Argb) {
        let (start, end) = if end_x < start_x { (end_x, start_x) } else { (start_x, end_x) };
        self.draw_rect(start, y, end + 1.0, y + 1.0, color);
    }

    /// One pixel wide line strictly between `start_y` and `end_y`.
    pub fn draw_vertical_line(&mut self, x: f64, start_y: f64, end_y: f64, color: Argb) {
        let (start, end) = if end_y < start_y { (end_y, start_y) } else { (start_y, end_y) };
        self.draw_rect(x, start + 1.0, x + 1.0, end, color);
    }

    /// Solid rect by its edges, in any order.
    pub fn draw_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Argb) {
        let rect = RectF::from_edges(left, top, right, bottom).normalized();
        self.renderer.fill_rect(rect, self.depth, &Paint::Solid(color));
    }

    pub fn draw_gradient_rect(
        &mut self,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        top_color: Argb,
        bottom_color: Argb,
    ) {
        let rect = RectF::from_edges(left, top, right, bottom);
        let paint = Paint::VerticalGradient { top: top_color, bottom: bottom_color };
        self.renderer.fill_rect(rect, self.depth, &paint);
    }

    pub fn draw_coloured_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Argb) {
        self.draw_gradient_rect(x, y, x + width, y + height, color, color);
    }

    /// A filled rect framed by a border drawn inside its bounds.
    ///
    /// Emits top and bottom strips at full width, left and right strips
    /// between them, then the fill.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bordered_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        border: f64,
        fill_color: Argb,
        border_color: Argb,
    ) {
        let inner_h = height - 2.0 * border;
        self.draw_coloured_rect(x, y, width, border, border_color);
        self.draw_coloured_rect(x, y + height - border, width, border, border_color);
        self.draw_coloured_rect(x, y + border, border, inner_h, border_color);
        self.draw_coloured_rect(x + width - border, y + border, border, inner_h, border_color);
        self.draw_coloured_rect(x + border, y + border, width - 2.0 * border, inner_h, fill_color);
    }

    // ── textures ──────────────────────────────────────────────────────────

    /// Quad sampling the same-sized region at `(u, v)` of a 256×256 texture.
    pub fn draw_textured_rect(&mut self, x: i32, y: i32, u: i32, v: i32, width: i32, height: i32) {
        let rect = RectF::from_origin_size(x as f64, y as f64, width as f64, height as f64);
        let uv = TexCoords::new(
            u as f64 * GUI_TEXEL,
            v as f64 * GUI_TEXEL,
            (u + width) as f64 * GUI_TEXEL,
            (v + height) as f64 * GUI_TEXEL,
        );
        self.renderer.textured_quad(rect, uv, self.depth);
    }

    /// Quad showing a whole atlas sprite stretched to `width × height`.
    pub fn draw_sprite(&mut self, x: i32, y: i32, sprite: Sprite, width: i32, height: i32) {
        let rect = RectF::from_origin_size(x as f64, y as f64, width as f64, height as f64);
        self.renderer.textured_quad(rect, sprite.tex_coords(), self.depth);
    }

    /// Like [`draw_textured_rect`](Self::draw_textured_rect) for a texture of
    /// arbitrary size.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_custom_sized_texture(
        &mut self,
        x: f64,
        y: f64,
        u: f64,
        v: f64,
        width: f64,
        height: f64,
        texture_width: f64,
        texture_height: f64,
    ) {
        self.draw_scaled_custom_size(x, y, u, v, width, height, width, height, texture_width, texture_height);
    }

    /// Samples a `u_width × v_height` region and stretches it over
    /// `width × height`, with UVs relative to a `tile_width × tile_height`
    /// texture.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_scaled_custom_size(
        &mut self,
        x: f64,
        y: f64,
        u: f64,
        v: f64,
        u_width: f64,
        v_height: f64,
        width: f64,
        height: f64,
        tile_width: f64,
        tile_height: f64,
    ) {
        let (fu, fv) = (1.0 / tile_width, 1.0 / tile_height);
        let rect = RectF::from_origin_size(x, y, width, height);
        let uv = TexCoords::new(u * fu, v * fv, (u + u_width) * fu, (v + v_height) * fv);
        self.renderer.textured_quad(rect, uv, self.depth);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Left-aligned text with a drop shadow.
    pub fn draw_string(&mut self, text: &str, x: i32, y: i32, color: Argb) {
        self.renderer.draw_text(text, x as f64, y as f64, color, true, self.depth);
    }

    /// Text horizontally centered on `center_x`.
    pub fn draw_centered_string(&mut self, text: &str, center_x: i32, y: i32, color: Argb, shadow: bool) {
        let x = center_x - self.host.font().string_width(text) / 2;
        self.renderer.draw_text(text, x as f64, y as f64, color, shadow, self.depth);
    }

    /// Wraps `text` to `wrap_width` and centers each line on `center_x`.
    pub fn draw_centered_split_string(
        &mut self,
        text: &str,
        center_x: i32,
        y: i32,
        wrap_width: i32,
        color: Argb,
        shadow: bool,
    ) {
        let font = self.host.font();
        let (lines, step) = (font.wrap_to_width(text, wrap_width), font.line_height());
        let mut line_y = y;
        for line in &lines {
            self.draw_centered_string(line, center_x, line_y, color, shadow);
            line_y += step;
        }
    }

    /// Tooltip box listing `lines` near `(x, y)`, above regular content.
    pub fn draw_hovering_text(&mut self, lines: &[String], x: i32, y: i32) {
        let (sw, sh) = (self.host.screen_width(), self.host.screen_height());
        self.renderer
            .draw_tooltip(lines, x, y, sw, sh, self.depth + TOOLTIP_DEPTH_OFFSET);
    }
}
