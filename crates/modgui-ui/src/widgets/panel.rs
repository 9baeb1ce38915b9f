use modgui_engine::paint::Argb;

use crate::behavior::{Behavior, ElementCx};
use crate::event::{PointerEvent, RenderArgs, RenderLayer};
use crate::painter::Painter;

/// Bordered background with an optional title, sized to its element.
///
/// The frame is drawn in the background layer and the title in the
/// foreground layer, so children render between them. An opaque panel
/// captures presses over its bounds that no child took.
///
/// # Example
/// ```rust,ignore
/// Element::new(host.clone())
///     .sized(160, 100)
///     .with_behavior(Draggable::new())
///     .with_behavior(Panel::new().title("Inventory").opaque(true))
/// ```
pub struct Panel {
    fill: Argb,
    border: Argb,
    border_width: i32,
    title: Option<String>,
    title_color: Argb,
    opaque: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            fill: Argb(0xC010_1010),
            border: Argb(0xFF50_5050),
            border_width: 1,
            title: None,
            title_color: Argb::WHITE,
            opaque: false,
        }
    }

    pub fn fill(mut self, color: impl Into<Argb>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn border(mut self, color: impl Into<Argb>, width: i32) -> Self {
        self.border = color.into();
        self.border_width = width.max(0);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_color(mut self, color: impl Into<Argb>) -> Self {
        self.title_color = color.into();
        self
    }

    pub fn opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for Panel {
    fn render(&mut self, layer: RenderLayer, cx: &mut ElementCx<'_>, painter: &mut Painter<'_>, _args: RenderArgs) {
        let r = cx.state.rect();
        match layer {
            RenderLayer::Background => {
                painter.draw_bordered_rect(
                    r.x as f64,
                    r.y as f64,
                    r.width as f64,
                    r.height as f64,
                    self.border_width as f64,
                    self.fill,
                    self.border,
                );
            }
            RenderLayer::Foreground => {
                if let Some(title) = &self.title {
                    let y = r.y + self.border_width + 2;
                    painter.draw_centered_string(title, r.x + r.width / 2, y, self.title_color, true);
                }
            }
            RenderLayer::Overlay => {}
        }
    }

    fn on_click_check(&mut self, cx: &mut ElementCx<'_>, ev: PointerEvent) -> bool {
        self.opaque && cx.state.is_mouse_over(ev.x, ev.y)
    }
}
