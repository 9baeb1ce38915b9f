use crate::behavior::{Behavior, ElementCx};
use crate::element::ElementState;
use crate::event::{DragEvent, PointerEvent};
use crate::restraint::{NormalizePosition, PositionRestraint, PositionValidator};

/// Default height of the strip at the top of an element that starts a drag.
pub const DEFAULT_DRAG_BAR_HEIGHT: i32 = 20;

/// Lets the user move an element by dragging it.
///
/// A press inside the drag zone starts a drag, motion with the button held
/// moves the element, and any release ends it. None of these capture the
/// event, so children keep receiving moves and releases; a press is only
/// seen here when no child captured it.
///
/// After every move (and on reload, when the element has a size) the
/// restraint policy adjusts the position; `on_moved` fires when the final
/// position differs from where the element was before.
///
/// ```rust,ignore
/// let window = Element::new(host.clone())
///     .sized(120, 80)
///     .with_behavior(Draggable::new().drag_bar_height(12).on_moved(|| save_layout()));
/// ```
pub struct Draggable {
    drag_offset: (i32, i32),
    dragging: bool,
    can_drag: Box<dyn Fn() -> bool>,
    drag_zone: Option<Box<dyn PositionValidator>>,
    drag_bar_height: i32,
    restraint: Box<dyn PositionRestraint>,
    on_moved: Option<Box<dyn FnMut()>>,
}

impl Default for Draggable {
    fn default() -> Self {
        Self::new()
    }
}

impl Draggable {
    pub fn new() -> Self {
        Self {
            drag_offset: (0, 0),
            dragging: false,
            can_drag: Box::new(|| true),
            drag_zone: None,
            drag_bar_height: DEFAULT_DRAG_BAR_HEIGHT,
            restraint: Box::new(NormalizePosition),
            on_moved: None,
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn drag_bar_height(mut self, height: i32) -> Self {
        self.drag_bar_height = height;
        self
    }

    pub fn can_drag(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.set_can_drag(f);
        self
    }

    /// Replaces the drag bar test with `validator`.
    pub fn drag_zone(mut self, validator: impl PositionValidator + 'static) -> Self {
        self.set_drag_zone(validator);
        self
    }

    pub fn restraint(mut self, restraint: impl PositionRestraint + 'static) -> Self {
        self.set_restraint(restraint);
        self
    }

    pub fn on_moved(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_moved(f);
        self
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_drag_bar_height(&mut self, height: i32) {
        self.drag_bar_height = height;
    }

    pub fn set_can_drag(&mut self, f: impl Fn() -> bool + 'static) {
        self.can_drag = Box::new(f);
    }

    pub fn set_drag_zone(&mut self, validator: impl PositionValidator + 'static) {
        self.drag_zone = Some(Box::new(validator));
    }

    pub fn clear_drag_zone(&mut self) {
        self.drag_zone = None;
    }

    pub fn set_restraint(&mut self, restraint: impl PositionRestraint + 'static) {
        self.restraint = Box::new(restraint);
    }

    pub fn set_on_moved(&mut self, f: impl FnMut() + 'static) {
        self.on_moved = Some(Box::new(f));
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Press position relative to the element origin, as of the last drag start.
    #[inline]
    pub fn drag_offset(&self) -> (i32, i32) {
        self.drag_offset
    }

    /// Whether a press at `(x, y)` lands in the zone that starts a drag.
    pub fn in_drag_zone(&self, state: &ElementState, x: i32, y: i32) -> bool {
        match &self.drag_zone {
            Some(zone) => zone.validate(x, y),
            None => state.rect().top_strip(self.drag_bar_height).contains(x, y),
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Applies the restraint, carries the children along, and fires
    /// `on_moved` if the element ended up somewhere other than `before`.
    fn settle(&mut self, cx: &mut ElementCx<'_>, before: (i32, i32)) {
        self.restraint.restrain(cx.state, cx.host);
        let (x, y) = cx.state.pos();
        if (x, y) == before {
            return;
        }
        cx.translate_children(x - before.0, y - before.1);
        if let Some(cb) = self.on_moved.as_mut() {
            cb();
        }
    }
}

impl Behavior for Draggable {
    fn on_reload(&mut self, cx: &mut ElementCx<'_>) {
        if cx.state.width > 0 && cx.state.height > 0 {
            let before = cx.state.pos();
            self.settle(cx, before);
        }
    }

    fn on_click_check(&mut self, cx: &mut ElementCx<'_>, ev: PointerEvent) -> bool {
        if (self.can_drag)() && self.in_drag_zone(cx.state, ev.x, ev.y) {
            let (x, y) = cx.state.pos();
            self.drag_offset = (ev.x - x, ev.y - y);
            self.dragging = true;
            log::debug!("drag start {:?} offset={:?}", cx.state.key(), self.drag_offset);
        }
        false
    }

    fn on_move_check(&mut self, cx: &mut ElementCx<'_>, ev: DragEvent) -> bool {
        if !self.dragging {
            return false;
        }
        let before = cx.state.pos();
        let target = (ev.x - self.drag_offset.0, ev.y - self.drag_offset.1);
        cx.state.translate(target.0 - before.0, target.1 - before.1);
        self.settle(cx, before);
        false
    }

    fn on_release_check(&mut self, cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
        if self.dragging {
            log::debug!("drag stop {:?} at {:?}", cx.state.key(), cx.state.pos());
        }
        self.dragging = false;
        false
    }
}
