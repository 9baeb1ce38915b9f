use std::any::Any;

use modgui_engine::host::Host;
use modgui_engine::input::{Key, RawMouseEvent};

use crate::element::{children, Element, ElementKey, ElementState};
use crate::event::{DragEvent, PointerEvent, RenderArgs, RenderLayer, ScrollEvent};
use crate::painter::Painter;

// ── ElementCx ─────────────────────────────────────────────────────────────

/// The element a behavior is attached to, as seen from inside a hook.
///
/// Own hooks never run while the element is looping over its children, so
/// a hook may add children directly. Removals are still deferred to the
/// element's next `on_update`.
pub struct ElementCx<'a> {
    pub state: &'a mut ElementState,
    pub children: &'a mut Vec<Element>,
    pub host: &'a dyn Host,
}

impl ElementCx<'_> {
    /// Appends `child`. A child added from `on_init` is initialized by the
    /// same `init_element` pass.
    pub fn add_child(&mut self, child: Element) -> ElementKey {
        let key = child.key();
        self.children.push(child);
        key
    }

    pub fn remove_child(&mut self, key: ElementKey) {
        children::schedule_by_key(self.children.as_mut_slice(), key);
    }

    pub fn remove_child_by_id(&mut self, id: &str) {
        children::schedule_by_id(self.children.as_mut_slice(), id);
    }

    pub fn remove_child_by_group(&mut self, group: &str) {
        children::schedule_by_group(self.children.as_mut_slice(), group);
    }

    pub fn set_child_enabled_by_id(&mut self, id: &str, enabled: bool) {
        children::enable_by_id(self.children.as_mut_slice(), id, enabled);
    }

    pub fn set_child_enabled_by_group(&mut self, group: &str, enabled: bool) {
        children::enable_by_group(self.children.as_mut_slice(), group, enabled);
    }

    /// Moves every child subtree by `(dx, dy)`; the element itself stays put.
    pub fn translate_children(&mut self, dx: i32, dy: i32) {
        for child in self.children.iter_mut() {
            child.translate(dx, dy);
        }
    }

    pub fn child_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.state().has_id(id))
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────

/// Object-safe access to the concrete behavior type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A capability attached to an [`Element`].
///
/// The element itself only dispatches; everything an element *does* (drawing,
/// hit-testing, dragging) lives in behaviors. Several behaviors may share one
/// element; they are consulted in attachment order.
///
/// Hook phases relative to the element's children:
///
/// | hook               | runs                                   | on `true`             |
/// |--------------------|----------------------------------------|-----------------------|
/// | `on_click_check`   | after children, only if none captured  | capture, stop         |
/// | `on_scroll`        | after children, only if none captured  | capture, stop         |
/// | `on_key_typed`     | after children, only if none captured  | capture, stop         |
/// | `on_mouse_input`   | after children, only if none captured  | capture, stop         |
/// | `on_move_check`    | before children, every behavior        | capture, skip children|
/// | `on_release_check` | before children, every behavior        | capture, skip children|
/// | `render`           | before children                        | —                     |
///
/// Every hook has a no-op default, so a behavior overrides only what it needs.
pub trait Behavior: AsAny {
    /// Called once from `Element::init_element`, before the children.
    fn on_init(&mut self, _cx: &mut ElementCx<'_>) {}

    /// Called every tick, after removed children are flushed.
    fn on_update(&mut self, _cx: &mut ElementCx<'_>) {}

    /// Called when the element's geometry was reset (`set_size`, host resize).
    fn on_reload(&mut self, _cx: &mut ElementCx<'_>) {}

    fn render(
        &mut self,
        _layer: RenderLayer,
        _cx: &mut ElementCx<'_>,
        _painter: &mut Painter<'_>,
        _args: RenderArgs,
    ) {
    }

    fn on_click_check(&mut self, _cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
        false
    }

    fn on_move_check(&mut self, _cx: &mut ElementCx<'_>, _ev: DragEvent) -> bool {
        false
    }

    fn on_release_check(&mut self, _cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
        false
    }

    fn on_scroll(&mut self, _cx: &mut ElementCx<'_>, _ev: ScrollEvent) -> bool {
        false
    }

    /// Every raw mouse sample (press, release, motion, wheel), already
    /// scaled to GUI coordinates.
    fn on_mouse_input(&mut self, _cx: &mut ElementCx<'_>, _mouse_x: i32, _mouse_y: i32, _raw: &RawMouseEvent) -> bool {
        false
    }

    /// Errors are propagated to the caller of `Element::key_typed` untouched.
    fn on_key_typed(&mut self, _cx: &mut ElementCx<'_>, _ch: char, _key: Key) -> anyhow::Result<bool> {
        Ok(false)
    }
}
