//! modgui — retained widget tree on top of `modgui-engine`.
//!
//! A screen is a tree of [`element::Element`]s. Elements own their children
//! and dispatch every update, render and input call to them in insertion
//! order; what an element actually draws or reacts to comes from the
//! [`behavior::Behavior`]s attached to it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use modgui_engine::host::HeadlessHost;
//! use modgui_engine::render::DrawList;
//! use modgui_ui::prelude::*;
//!
//! let host = HeadlessHost::new(320, 240).into_handle();
//! let mut screen = ModularScreen::new(host.clone());
//! screen.add_element(
//!     Element::new(host)
//!         .at(10, 10)
//!         .sized(120, 80)
//!         .with_behavior(Draggable::new())
//!         .with_behavior(Panel::new().title("Hello").opaque(true)),
//! );
//! screen.init();
//!
//! // In your frame callback:
//! let mut list = DrawList::new();
//! screen.frame(&events, &mut list, partial_ticks)?;
//! // Hand `list` to your renderer.
//! ```
//!
//! # Extending with custom behaviors
//!
//! Implement [`behavior::Behavior`] and override only the hooks you need:
//!
//! ```rust,ignore
//! use modgui_ui::prelude::*;
//!
//! struct Highlight(Argb);
//!
//! impl Behavior for Highlight {
//!     fn render(&mut self, layer: RenderLayer, cx: &mut ElementCx<'_>, painter: &mut Painter<'_>, args: RenderArgs) {
//!         let r = cx.state.rect();
//!         if layer == RenderLayer::Overlay && r.contains(args.mouse_x, args.mouse_y) {
//!             painter.draw_coloured_rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64, self.0);
//!         }
//!     }
//! }
//! ```

pub mod behavior;
pub mod draggable;
pub mod element;
pub mod event;
pub mod painter;
pub mod restraint;
pub mod screen;
pub mod widgets;

/// Everything you need to build and extend a screen.
pub mod prelude {
    pub use crate::behavior::{Behavior, ElementCx};
    pub use crate::draggable::Draggable;
    pub use crate::element::{Element, ElementKey, ElementState};
    pub use crate::event::{DragEvent, PointerEvent, RenderArgs, RenderLayer, ScrollEvent};
    pub use crate::painter::Painter;
    pub use crate::restraint::{NormalizePosition, PositionRestraint, PositionValidator, Unrestrained};
    pub use crate::screen::ModularScreen;
    pub use crate::widgets::Panel;

    // Re-export the engine primitives everyone needs.
    pub use modgui_engine::coords::{Rect, RectF};
    pub use modgui_engine::host::{Host, HostHandle};
    pub use modgui_engine::input::{Key, MouseButton};
    pub use modgui_engine::paint::{Argb, Paint};
}
