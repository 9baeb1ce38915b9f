use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use modgui_engine::coords::Rect;
use modgui_engine::host::{scale_device_pos, Host, HostHandle};
use modgui_engine::input::{Key, MouseButton, RawMouseEvent};
use modgui_engine::render::Renderer;

use crate::behavior::{Behavior, ElementCx};
use crate::event::{DragEvent, PointerEvent, RenderArgs, RenderLayer, ScrollEvent};
use crate::painter::Painter;

static NEXT_ELEMENT_KEY: AtomicU64 = AtomicU64::new(1);

// ── ElementKey ────────────────────────────────────────────────────────────

/// Process-unique handle of an element, used to address one specific child.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ElementKey(u64);

impl ElementKey {
    fn next() -> Self {
        ElementKey(NEXT_ELEMENT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

// ── ElementState ──────────────────────────────────────────────────────────

/// Geometry, flags and addressing of one element.
///
/// This is the part of an element that behaviors may mutate from their hooks.
#[derive(Debug, Clone)]
pub struct ElementState {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Added to the host's z level when rendering.
    pub z_offset: f64,
    /// Ordering hint for an external manager; never read by the tree.
    pub display_level: i32,
    /// Unique by convention only.
    pub id: Option<String>,
    enabled: bool,
    groups: Vec<String>,
    pending_removal: bool,
    key: ElementKey,
}

impl ElementState {
    fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            z_offset: 0.0,
            display_level: 0,
            id: None,
            enabled: true,
            groups: Vec::new(),
            pending_removal: false,
            key: ElementKey::next(),
        }
    }

    #[inline]
    pub fn key(&self) -> ElementKey {
        self.key
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Half-open containment test over this element's bounds.
    #[inline]
    pub fn is_mouse_over(&self, mouse_x: i32, mouse_y: i32) -> bool {
        self.rect().contains(mouse_x, mouse_y)
    }

    #[inline]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Marks this element for removal by its parent's next `on_update`.
    #[inline]
    pub fn schedule_removal(&mut self) {
        self.pending_removal = true;
    }

    #[inline]
    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }

    pub fn add_to_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    pub fn remove_from_group(&mut self, group: &str) {
        self.groups.retain(|g| g != group);
    }

    pub fn remove_from_all_groups(&mut self) {
        self.groups.clear();
    }

    pub fn is_in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

// ── child-list operations ─────────────────────────────────────────────────

/// Operations over a child slice, shared by [`Element`] and [`ElementCx`].
///
/// None of them change the slice's length; removals only set the tombstone.
pub(crate) mod children {
    use super::{Element, ElementKey};

    pub fn schedule_by_key(children: &mut [Element], key: ElementKey) {
        if let Some(c) = children.iter_mut().find(|c| c.state.key == key) {
            c.state.schedule_removal();
        }
    }

    pub fn schedule_by_id(children: &mut [Element], id: &str) {
        if let Some(c) = children.iter_mut().find(|c| c.state.has_id(id)) {
            c.state.schedule_removal();
        }
    }

    pub fn schedule_by_group(children: &mut [Element], group: &str) {
        children
            .iter_mut()
            .filter(|c| c.state.is_in_group(group))
            .for_each(|c| c.state.schedule_removal());
    }

    pub fn enable_by_id(children: &mut [Element], id: &str, enabled: bool) {
        if let Some(c) = children.iter_mut().find(|c| c.state.has_id(id)) {
            c.state.set_enabled(enabled);
        }
    }

    pub fn enable_by_group(children: &mut [Element], group: &str, enabled: bool) {
        children
            .iter_mut()
            .filter(|c| c.state.is_in_group(group))
            .for_each(|c| c.state.set_enabled(enabled));
    }

    /// First-capture-wins dispatch over enabled children, in insertion order.
    pub fn capture(children: &mut [Element], mut f: impl FnMut(&mut Element) -> bool) -> bool {
        for child in children.iter_mut() {
            if child.state.is_enabled() && f(child) {
                log::trace!("captured by child {:?}", child.state.key);
                return true;
            }
        }
        false
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A node of the widget tree.
///
/// An element owns its children exclusively and dispatches every tree
/// operation to them in insertion order. On its own it draws nothing and
/// captures nothing; attach [`Behavior`]s to give it visuals and hit
/// behavior.
///
/// Rules every dispatch follows:
/// - disabled children receive no render or input calls, but still tick;
/// - the first child that captures an input event stops the loop and the
///   parent reports the capture too;
/// - removals are deferred: a removed child stays in place (and keeps
///   receiving calls) until the start of the parent's next `on_update`.
///
/// # Example
/// ```rust,ignore
/// let mut root = Element::new(host.clone()).sized(320, 240);
/// root.add_child(
///     Element::new(host.clone())
///         .at(10, 10)
///         .sized(100, 60)
///         .with_id("window")
///         .with_behavior(Draggable::new()),
/// );
/// ```
pub struct Element {
    state: ElementState,
    children: Vec<Element>,
    behaviors: Vec<Box<dyn Behavior>>,
    host: HostHandle,
}

impl Element {
    pub fn new(host: HostHandle) -> Self {
        Self {
            state: ElementState::new(),
            children: Vec::new(),
            behaviors: Vec::new(),
            host,
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.state.set_pos(x, y);
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.state.width = width;
        self.state.height = height;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.state.id = Some(id.into());
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.state.add_to_group(group);
        self
    }

    pub fn with_z_offset(mut self, z: f64) -> Self {
        self.state.z_offset = z;
        self
    }

    pub fn with_behavior(mut self, behavior: impl Behavior) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn key(&self) -> ElementKey {
        self.state.key
    }

    #[inline]
    pub fn state(&self) -> &ElementState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }

    #[inline]
    pub fn host(&self) -> &HostHandle {
        &self.host
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.state.id.as_deref()
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.state.rect()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.state.set_enabled(enabled);
        self
    }

    #[inline]
    pub fn is_mouse_over(&self, mouse_x: i32, mouse_y: i32) -> bool {
        self.state.is_mouse_over(mouse_x, mouse_y)
    }

    /// Host base depth plus this element's z offset.
    #[inline]
    pub fn render_depth(&self) -> f64 {
        self.host.z_level() + self.state.z_offset
    }

    /// Moves the element without reloading it.
    pub fn set_pos(&mut self, x: i32, y: i32) -> &mut Self {
        self.state.set_pos(x, y);
        self
    }

    /// Moves the element and its whole subtree by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.state.translate(dx, dy);
        for child in self.children.iter_mut() {
            child.translate(dx, dy);
        }
        self
    }

    /// Resizes the element, then reloads it.
    pub fn set_size(&mut self, width: i32, height: i32) -> &mut Self {
        self.state.width = width;
        self.state.height = height;
        self.reload_element();
        self
    }

    /// Moves and resizes the element, then reloads it.
    pub fn set_rect(&mut self, rect: Rect) -> &mut Self {
        self.state.set_pos(rect.x, rect.y);
        self.set_size(rect.width, rect.height)
    }

    // ── groups ────────────────────────────────────────────────────────────

    pub fn add_to_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.state.add_to_group(group);
        self
    }

    pub fn remove_from_group(&mut self, group: &str) -> &mut Self {
        self.state.remove_from_group(group);
        self
    }

    pub fn remove_from_all_groups(&mut self) -> &mut Self {
        self.state.remove_from_all_groups();
        self
    }

    pub fn is_in_group(&self, group: &str) -> bool {
        self.state.is_in_group(group)
    }

    pub fn groups(&self) -> &[String] {
        self.state.groups()
    }

    // ── behaviors ─────────────────────────────────────────────────────────

    pub fn add_behavior(&mut self, behavior: impl Behavior) -> &mut Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// The first attached behavior of type `T`.
    pub fn behavior<T: Behavior>(&self) -> Option<&T> {
        self.behaviors.iter().find_map(|b| {
            let b: &dyn Behavior = &**b;
            b.as_any().downcast_ref::<T>()
        })
    }

    pub fn behavior_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.behaviors.iter_mut().find_map(|b| {
            let b: &mut dyn Behavior = &mut **b;
            b.as_any_mut().downcast_mut::<T>()
        })
    }

    // ── children ──────────────────────────────────────────────────────────

    /// Appends `child`. No uniqueness check is made.
    pub fn add_child(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Schedules the child with `key` for removal. No-op if absent.
    pub fn remove_child(&mut self, key: ElementKey) -> &mut Self {
        children::schedule_by_key(&mut self.children, key);
        self
    }

    /// Schedules the first child with `id` for removal. No-op if absent.
    pub fn remove_child_by_id(&mut self, id: &str) -> &mut Self {
        children::schedule_by_id(&mut self.children, id);
        self
    }

    /// Schedules every child in `group` for removal.
    pub fn remove_child_by_group(&mut self, group: &str) -> &mut Self {
        children::schedule_by_group(&mut self.children, group);
        self
    }

    pub fn set_child_enabled_by_id(&mut self, id: &str, enabled: bool) -> &mut Self {
        children::enable_by_id(&mut self.children, id, enabled);
        self
    }

    pub fn set_child_enabled_by_group(&mut self, group: &str, enabled: bool) -> &mut Self {
        children::enable_by_group(&mut self.children, group, enabled);
        self
    }

    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Children as a slice; use the `add`/`remove` methods for structural changes.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn child_by_id(&self, id: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.state.has_id(id))
    }

    pub fn child_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.state.has_id(id))
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Initializes this element, then its children, depth-first.
    pub fn init_element(&mut self) {
        self.notify_behaviors(|b, cx| {
            b.on_init(cx);
            false
        });
        for child in self.children.iter_mut() {
            child.init_element();
        }
    }

    /// Per-tick update.
    ///
    /// Flushes removed children first, whether or not this element is
    /// enabled, then ticks behaviors and every child (disabled ones too).
    pub fn on_update(&mut self) {
        let before = self.children.len();
        self.children.retain(|c| !c.state.pending_removal);
        let removed = before - self.children.len();
        if removed > 0 {
            log::trace!("element {:?}: flushed {removed} removed children", self.state.key);
        }

        self.notify_behaviors(|b, cx| {
            b.on_update(cx);
            false
        });
        for child in self.children.iter_mut() {
            child.on_update();
        }
    }

    /// Re-applies geometry-dependent state, then reloads the children.
    pub fn reload_element(&mut self) {
        self.notify_behaviors(|b, cx| {
            b.on_reload(cx);
            false
        });
        for child in self.children.iter_mut() {
            child.reload_element();
        }
    }

    // ── render ────────────────────────────────────────────────────────────

    pub fn render_background_layer(&mut self, renderer: &mut dyn Renderer, mouse_x: i32, mouse_y: i32, partial_ticks: f32) {
        self.render_layer(RenderLayer::Background, renderer, RenderArgs { mouse_x, mouse_y, partial_ticks });
    }

    pub fn render_foreground_layer(&mut self, renderer: &mut dyn Renderer, mouse_x: i32, mouse_y: i32, partial_ticks: f32) {
        self.render_layer(RenderLayer::Foreground, renderer, RenderArgs { mouse_x, mouse_y, partial_ticks });
    }

    pub fn render_overlay_layer(&mut self, renderer: &mut dyn Renderer, mouse_x: i32, mouse_y: i32, partial_ticks: f32) {
        self.render_layer(RenderLayer::Overlay, renderer, RenderArgs { mouse_x, mouse_y, partial_ticks });
    }

    /// Draws this element's behaviors, then recurses into enabled children.
    ///
    /// Only this subtree is covered; whole-tree layering comes from calling
    /// each layer on the root in turn.
    pub fn render_layer(&mut self, layer: RenderLayer, renderer: &mut dyn Renderer, args: RenderArgs) {
        let depth = self.render_depth();
        {
            let Element { state, children, behaviors, host } = self;
            let host: &dyn Host = &**host;
            let mut painter = Painter::new(&mut *renderer, host, depth);
            let mut cx = ElementCx { state, children, host };
            for b in behaviors.iter_mut() {
                b.render(layer, &mut cx, &mut painter, args);
            }
        }
        for child in self.children.iter_mut().filter(|c| c.state.is_enabled()) {
            child.render_layer(layer, renderer, args);
        }
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    /// Called for every press, whether or not it is over this element.
    ///
    /// Returns `true` when the press was captured.
    pub fn mouse_clicked(&mut self, mouse_x: i32, mouse_y: i32, button: MouseButton) -> bool {
        if children::capture(&mut self.children, |c| c.mouse_clicked(mouse_x, mouse_y, button)) {
            return true;
        }
        let ev = PointerEvent { x: mouse_x, y: mouse_y, button };
        self.capture_behaviors(|b, cx| b.on_click_check(cx, ev))
    }

    /// Called for every release, whether or not it is over this element.
    pub fn mouse_released(&mut self, mouse_x: i32, mouse_y: i32, button: MouseButton) -> bool {
        let ev = PointerEvent { x: mouse_x, y: mouse_y, button };
        if self.notify_behaviors(|b, cx| b.on_release_check(cx, ev)) {
            return true;
        }
        children::capture(&mut self.children, |c| c.mouse_released(mouse_x, mouse_y, button))
    }

    /// Called for pointer motion while a button is held.
    pub fn mouse_click_move(
        &mut self,
        mouse_x: i32,
        mouse_y: i32,
        button: MouseButton,
        held_for: Duration,
    ) -> bool {
        let ev = DragEvent { x: mouse_x, y: mouse_y, button, held_for };
        if self.notify_behaviors(|b, cx| b.on_move_check(cx, ev)) {
            return true;
        }
        children::capture(&mut self.children, |c| c.mouse_click_move(mouse_x, mouse_y, button, held_for))
    }

    /// Called for every raw mouse sample.
    ///
    /// Converts device coordinates with the host's screen/display ratio. A
    /// sample carrying wheel motion is offered to the children as a scroll
    /// first; then the raw sample goes to the children, and finally to this
    /// element's behaviors if no child captured it.
    ///
    /// Every level re-offers the scroll to its own subtree, so a
    /// non-capturing `on_scroll` at depth `d` below the receiving element
    /// sees one wheel sample `d` times.
    pub fn handle_mouse_input(&mut self, raw: &RawMouseEvent) -> bool {
        let (mouse_x, mouse_y) = scale_device_pos(&*self.host, raw.x, raw.y);

        if raw.dwheel != 0
            && children::capture(&mut self.children, |c| c.handle_mouse_scroll(mouse_x, mouse_y, raw.dwheel))
        {
            return true;
        }

        if children::capture(&mut self.children, |c| c.handle_mouse_input(raw)) {
            return true;
        }
        self.capture_behaviors(|b, cx| b.on_mouse_input(cx, mouse_x, mouse_y, raw))
    }

    pub fn handle_mouse_scroll(&mut self, mouse_x: i32, mouse_y: i32, delta: i32) -> bool {
        if children::capture(&mut self.children, |c| c.handle_mouse_scroll(mouse_x, mouse_y, delta)) {
            return true;
        }
        let ev = ScrollEvent { x: mouse_x, y: mouse_y, delta };
        self.capture_behaviors(|b, cx| b.on_scroll(cx, ev))
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    /// Returns `Ok(true)` to stop further processing. Handler errors are
    /// returned as-is.
    pub fn key_typed(&mut self, ch: char, key: Key) -> anyhow::Result<bool> {
        for child in self.children.iter_mut() {
            if child.state.is_enabled() && child.key_typed(ch, key)? {
                return Ok(true);
            }
        }

        let Element { state, children, behaviors, host } = self;
        let mut cx = ElementCx { state, children, host: &**host };
        for b in behaviors.iter_mut() {
            if b.on_key_typed(&mut cx, ch, key)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Runs `f` on every behavior; true if any returned true.
    fn notify_behaviors(&mut self, mut f: impl FnMut(&mut dyn Behavior, &mut ElementCx<'_>) -> bool) -> bool {
        let Element { state, children, behaviors, host } = self;
        let mut cx = ElementCx { state, children, host: &**host };
        let mut captured = false;
        for b in behaviors.iter_mut() {
            captured |= f(&mut **b, &mut cx);
        }
        captured
    }

    /// Runs `f` on behaviors until one returns true.
    fn capture_behaviors(&mut self, mut f: impl FnMut(&mut dyn Behavior, &mut ElementCx<'_>) -> bool) -> bool {
        let Element { state, children, behaviors, host } = self;
        let mut cx = ElementCx { state, children, host: &**host };
        behaviors.iter_mut().any(|b| f(&mut **b, &mut cx))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use modgui_engine::host::HeadlessHost;
    use modgui_engine::paint::Argb;
    use modgui_engine::render::{DrawCmd, DrawList};

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    fn host() -> HostHandle {
        HeadlessHost::new(320, 240).into_handle()
    }

    /// Records every hook it sees under `name`; captures what `captures` says.
    struct Recorder {
        name: &'static str,
        log: Log,
        captures: bool,
        remove_self_on_update: bool,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Self { name, log: log.clone(), captures: false, remove_self_on_update: false }
        }

        fn capturing(mut self) -> Self {
            self.captures = true;
            self
        }

        fn record(&self, what: &str) {
            self.log.borrow_mut().push(format!("{}:{what}", self.name));
        }
    }

    impl Behavior for Recorder {
        fn on_init(&mut self, _cx: &mut ElementCx<'_>) {
            self.record("init");
        }

        fn on_update(&mut self, cx: &mut ElementCx<'_>) {
            self.record("update");
            if self.remove_self_on_update {
                cx.state.schedule_removal();
            }
        }

        fn render(&mut self, layer: RenderLayer, _cx: &mut ElementCx<'_>, painter: &mut Painter<'_>, _args: RenderArgs) {
            self.record(&format!("{layer:?}"));
            painter.draw_string(self.name, 0, 0, Argb::WHITE);
        }

        fn on_click_check(&mut self, _cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
            self.record("click");
            self.captures
        }

        fn on_move_check(&mut self, _cx: &mut ElementCx<'_>, _ev: DragEvent) -> bool {
            self.record("move");
            false
        }

        fn on_release_check(&mut self, _cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
            self.record("release");
            false
        }

        fn on_scroll(&mut self, _cx: &mut ElementCx<'_>, ev: ScrollEvent) -> bool {
            self.record(&format!("scroll{}", ev.delta));
            self.captures
        }

        fn on_mouse_input(&mut self, _cx: &mut ElementCx<'_>, mouse_x: i32, mouse_y: i32, _raw: &RawMouseEvent) -> bool {
            self.record(&format!("raw{mouse_x},{mouse_y}"));
            self.captures
        }

        fn on_key_typed(&mut self, _cx: &mut ElementCx<'_>, ch: char, _key: Key) -> anyhow::Result<bool> {
            self.record(&format!("key{ch}"));
            if ch == '!' {
                anyhow::bail!("{} refused key", self.name);
            }
            Ok(self.captures)
        }
    }

    fn recorder_child(h: &HostHandle, recorder: Recorder) -> Element {
        Element::new(h.clone()).sized(50, 50).with_behavior(recorder)
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    // ── deferred removal ──────────────────────────────────────────────────

    #[test]
    fn self_removal_during_update_is_deferred_to_next_tick() {
        let h = host();
        let log = Log::default();
        let mut doomed = Recorder::new("doomed", &log);
        doomed.remove_self_on_update = true;

        let mut root = Element::new(h.clone())
            .with_child(recorder_child(&h, doomed))
            .with_child(recorder_child(&h, Recorder::new("other", &log)));

        root.on_update();
        // Both children ticked and the doomed one is still in place.
        assert_eq!(entries(&log), vec!["doomed:update", "other:update"]);
        assert_eq!(root.children().len(), 2);
        assert!(root.children()[0].state().is_pending_removal());

        root.on_update();
        assert_eq!(root.children().len(), 1);
        assert_eq!(entries(&log).last().map(String::as_str), Some("other:update"));
        assert_eq!(entries(&log).len(), 3);
    }

    #[test]
    fn removed_child_still_receives_input_until_flushed() {
        let h = host();
        let log = Log::default();
        let child = recorder_child(&h, Recorder::new("a", &log).capturing());
        let key = child.key();
        let mut root = Element::new(h.clone()).with_child(child);

        root.remove_child(key);
        assert!(root.mouse_clicked(1, 1, MouseButton::Left));
        root.on_update();
        assert!(!root.mouse_clicked(1, 1, MouseButton::Left));
        assert_eq!(entries(&log), vec!["a:click"]);
    }

    #[test]
    fn removal_is_flushed_even_when_disabled() {
        let h = host();
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).with_id("x"));
        root.set_enabled(false);
        root.remove_child_by_id("x");
        root.on_update();
        assert!(root.children().is_empty());
    }

    #[test]
    fn remove_by_id_takes_first_match_only() {
        let h = host();
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).with_id("dup").in_group("first"))
            .with_child(Element::new(h.clone()).with_id("dup"));
        root.remove_child_by_id("dup");
        root.on_update();
        assert_eq!(root.children().len(), 1);
        assert!(!root.children()[0].is_in_group("first"));
    }

    #[test]
    fn remove_by_group_removes_all_tagged_children() {
        let h = host();
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).with_id("a").in_group("fx"))
            .with_child(Element::new(h.clone()).with_id("b"))
            .with_child(Element::new(h.clone()).with_id("c").in_group("fx"));

        root.remove_child_by_group("fx");
        assert_eq!(root.children().len(), 3);
        root.on_update();
        let ids: Vec<_> = root.children().iter().filter_map(|c| c.id()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn unmatched_lookups_are_no_ops() {
        let h = host();
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).with_id("a").in_group("g"));
        let stranger = Element::new(h.clone());

        root.remove_child_by_group("nope")
            .remove_child_by_id("nope")
            .remove_child(stranger.key())
            .set_child_enabled_by_id("nope", false)
            .set_child_enabled_by_group("nope", false);
        root.on_update();

        assert_eq!(root.children().len(), 1);
        assert!(root.children()[0].is_enabled());
    }

    #[test]
    fn behavior_can_schedule_child_removal_through_cx() {
        struct Reaper;
        impl Behavior for Reaper {
            fn on_update(&mut self, cx: &mut ElementCx<'_>) {
                cx.remove_child_by_id("victim");
            }
        }

        let h = host();
        let mut root = Element::new(h.clone())
            .with_behavior(Reaper)
            .with_child(Element::new(h.clone()).with_id("victim"));
        root.on_update();
        assert_eq!(root.children().len(), 1);
        root.on_update();
        assert!(root.children().is_empty());
    }

    // ── enable / groups ───────────────────────────────────────────────────

    #[test]
    fn enable_by_group_touches_every_member() {
        let h = host();
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).in_group("tabs"))
            .with_child(Element::new(h.clone()))
            .with_child(Element::new(h.clone()).in_group("tabs"));
        root.set_child_enabled_by_group("tabs", false);
        let enabled: Vec<_> = root.children().iter().map(Element::is_enabled).collect();
        assert_eq!(enabled, vec![false, true, false]);

        root.set_child_enabled_by_id("missing", true);
        root.set_child_enabled_by_group("tabs", true);
        assert!(root.children().iter().all(Element::is_enabled));
    }

    #[test]
    fn groups_behave_as_a_set() {
        let h = host();
        let mut e = Element::new(h);
        e.add_to_group("a").add_to_group("a").add_to_group("b");
        assert_eq!(e.groups(), ["a".to_string(), "b".to_string()]);
        e.remove_from_group("a");
        assert!(!e.is_in_group("a"));
        e.remove_from_all_groups();
        assert!(e.groups().is_empty());
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn first_capturing_child_wins() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_child(recorder_child(&h, Recorder::new("c1", &log).capturing()))
            .with_child(recorder_child(&h, Recorder::new("c2", &log).capturing()));

        assert!(root.mouse_clicked(10, 10, MouseButton::Left));
        assert_eq!(entries(&log), vec!["c1:click"]);
    }

    #[test]
    fn non_capturing_children_all_see_the_click() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(recorder_child(&h, Recorder::new("c1", &log)))
            .with_child(recorder_child(&h, Recorder::new("c2", &log)));

        assert!(!root.mouse_clicked(10, 10, MouseButton::Left));
        assert_eq!(entries(&log), vec!["c1:click", "c2:click", "root:click"]);
    }

    #[test]
    fn captured_click_skips_parent_behaviors() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(recorder_child(&h, Recorder::new("c1", &log).capturing()));

        assert!(root.mouse_clicked(10, 10, MouseButton::Left));
        assert_eq!(entries(&log), vec!["c1:click"]);
    }

    #[test]
    fn move_and_release_reach_own_behaviors_before_children() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(recorder_child(&h, Recorder::new("c1", &log)));

        root.mouse_click_move(5, 5, MouseButton::Left, Duration::from_millis(30));
        root.mouse_released(5, 5, MouseButton::Left);
        assert_eq!(entries(&log), vec!["root:move", "c1:move", "root:release", "c1:release"]);
    }

    #[test]
    fn disabled_child_gets_update_but_no_render_or_input() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_child(recorder_child(&h, Recorder::new("off", &log).capturing()));
        root.children_mut()[0].set_enabled(false);

        root.on_update();
        let mut list = DrawList::new();
        for layer in RenderLayer::ALL {
            root.render_layer(layer, &mut list, RenderArgs::default());
        }
        assert!(!root.mouse_clicked(1, 1, MouseButton::Left));
        assert!(!root.mouse_released(1, 1, MouseButton::Left));
        assert!(!root.mouse_click_move(1, 1, MouseButton::Left, Duration::from_millis(5)));
        assert!(!root.handle_mouse_scroll(1, 1, 1));
        assert!(!root.handle_mouse_input(&RawMouseEvent { x: 1, y: 1, dwheel: 0 }));
        assert!(!root.handle_mouse_input(&RawMouseEvent { x: 1, y: 1, dwheel: 1 }));
        assert!(!root.key_typed('a', Key::Character).unwrap());

        assert_eq!(entries(&log), vec!["off:update"]);
        assert!(list.is_empty());
    }

    #[test]
    fn leaf_without_behaviors_captures_nothing() {
        let mut leaf = Element::new(host()).sized(10, 10);
        assert!(!leaf.mouse_clicked(1, 1, MouseButton::Left));
        assert!(!leaf.mouse_click_move(1, 1, MouseButton::Left, Duration::ZERO));
        assert!(!leaf.handle_mouse_input(&RawMouseEvent { x: 1, y: 1, dwheel: 1 }));
        assert!(!leaf.key_typed('x', Key::Character).unwrap());
    }

    #[test]
    fn raw_wheel_input_is_scaled_and_offered_as_scroll() {
        struct ScrollSpy(Rc<RefCell<Option<ScrollEvent>>>);
        impl Behavior for ScrollSpy {
            fn on_scroll(&mut self, _cx: &mut ElementCx<'_>, ev: ScrollEvent) -> bool {
                *self.0.borrow_mut() = Some(ev);
                true
            }
        }

        let h: HostHandle = HeadlessHost::new(320, 240).with_display(640, 480).into_handle();
        let seen = Rc::new(RefCell::new(None));
        let mut root = Element::new(h.clone())
            .with_child(Element::new(h.clone()).with_behavior(ScrollSpy(seen.clone())));

        assert!(root.handle_mouse_input(&RawMouseEvent { x: 200, y: 100, dwheel: -1 }));
        assert_eq!(*seen.borrow(), Some(ScrollEvent { x: 100, y: 240 - 50 - 1, delta: -1 }));

        *seen.borrow_mut() = None;
        assert!(!root.handle_mouse_input(&RawMouseEvent { x: 200, y: 100, dwheel: 0 }));
        assert_eq!(*seen.borrow(), None);
    }

    #[test]
    fn behaviors_capture_raw_input_after_children() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log).capturing())
            .with_child(recorder_child(&h, Recorder::new("a", &log)));

        // 1:1 host: device y 200 is GUI row 240 - 200 - 1.
        assert!(root.handle_mouse_input(&RawMouseEvent { x: 30, y: 200, dwheel: 0 }));
        assert_eq!(entries(&log), vec!["a:raw30,39", "root:raw30,39"]);
    }

    #[test]
    fn capturing_child_hides_raw_input_from_parent() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(recorder_child(&h, Recorder::new("a", &log).capturing()));

        assert!(root.handle_mouse_input(&RawMouseEvent { x: 0, y: 239, dwheel: 0 }));
        assert_eq!(entries(&log), vec!["a:raw0,0"]);
    }

    #[test]
    fn wheel_sample_is_offered_once_per_level_above_the_receiver() {
        struct CountScroll(Rc<RefCell<u32>>);
        impl Behavior for CountScroll {
            fn on_scroll(&mut self, _cx: &mut ElementCx<'_>, _ev: ScrollEvent) -> bool {
                *self.0.borrow_mut() += 1;
                false
            }
        }

        let h = host();
        let calls = Rc::new(RefCell::new(0));
        let grandchild = Element::new(h.clone()).with_behavior(CountScroll(calls.clone()));
        let mut root = Element::new(h.clone()).with_child(Element::new(h.clone()).with_child(grandchild));

        assert!(!root.handle_mouse_input(&RawMouseEvent { x: 5, y: 5, dwheel: 1 }));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn key_errors_propagate_unchanged() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_child(recorder_child(&h, Recorder::new("typist", &log)))
            .with_child(recorder_child(&h, Recorder::new("after", &log)));

        let err = root.key_typed('!', Key::Character).unwrap_err();
        assert_eq!(err.to_string(), "typist refused key");
        assert_eq!(entries(&log), vec!["typist:key!"]);
    }

    #[test]
    fn key_capture_stops_at_first_child() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_child(recorder_child(&h, Recorder::new("a", &log).capturing()))
            .with_child(recorder_child(&h, Recorder::new("b", &log)));
        assert!(root.key_typed('k', Key::Character).unwrap());
        assert_eq!(entries(&log), vec!["a:keyk"]);
    }

    // ── lifecycle / render ────────────────────────────────────────────────

    #[test]
    fn init_is_pre_order_depth_first() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(
                Element::new(h.clone())
                    .with_behavior(Recorder::new("a", &log))
                    .with_child(Element::new(h.clone()).with_behavior(Recorder::new("a1", &log))),
            )
            .with_child(Element::new(h.clone()).with_behavior(Recorder::new("b", &log)));

        root.init_element();
        assert_eq!(entries(&log), vec!["root:init", "a:init", "a1:init", "b:init"]);
    }

    /// Adds one recorded child, from `on_init` or from the first click.
    struct Spawner {
        host: HostHandle,
        log: Log,
        on_init: bool,
        spawned: bool,
    }

    impl Spawner {
        fn spawn(&mut self, cx: &mut ElementCx<'_>) -> bool {
            if self.spawned {
                return false;
            }
            self.spawned = true;
            let child = Element::new(self.host.clone())
                .sized(50, 50)
                .with_id("spawned")
                .with_behavior(Recorder::new("spawned", &self.log));
            cx.add_child(child);
            true
        }
    }

    impl Behavior for Spawner {
        fn on_init(&mut self, cx: &mut ElementCx<'_>) {
            if self.on_init {
                self.spawn(cx);
            }
        }

        fn on_click_check(&mut self, cx: &mut ElementCx<'_>, _ev: PointerEvent) -> bool {
            !self.on_init && self.spawn(cx)
        }
    }

    #[test]
    fn child_added_from_init_is_initialized_in_the_same_pass() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone()).with_behavior(Spawner { host: h.clone(), log: log.clone(), on_init: true, spawned: false });

        root.init_element();
        assert_eq!(root.children().len(), 1);
        assert_eq!(entries(&log), vec!["spawned:init"]);
    }

    #[test]
    fn child_added_from_click_receives_later_input() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone()).with_behavior(Spawner { host: h.clone(), log: log.clone(), on_init: false, spawned: false });

        assert!(root.mouse_clicked(1, 1, MouseButton::Left));
        assert!(root.child_by_id("spawned").is_some());
        assert!(entries(&log).is_empty());

        assert!(!root.mouse_clicked(1, 1, MouseButton::Left));
        assert_eq!(entries(&log), vec!["spawned:click"]);
    }

    #[test]
    fn render_draws_parent_before_children_in_insertion_order() {
        let h = host();
        let log = Log::default();
        let mut root = Element::new(h.clone())
            .with_behavior(Recorder::new("root", &log))
            .with_child(recorder_child(&h, Recorder::new("a", &log)))
            .with_child(recorder_child(&h, Recorder::new("b", &log)));

        let mut list = DrawList::new();
        root.render_foreground_layer(&mut list, 0, 0, 0.0);
        assert_eq!(list.texts(), vec!["root", "a", "b"]);
    }

    #[test]
    fn render_depth_adds_z_offset_to_host_level() {
        let h: HostHandle = HeadlessHost::new(10, 10).with_z_level(100.0).into_handle();
        let log = Log::default();
        let mut e = Element::new(h).with_z_offset(5.0).with_behavior(Recorder::new("e", &log));
        assert_eq!(e.render_depth(), 105.0);

        let mut list = DrawList::new();
        e.render_overlay_layer(&mut list, 0, 0, 0.0);
        assert!(matches!(list.items()[0], DrawCmd::Text { depth, .. } if depth == 105.0));
    }

    #[test]
    fn mouse_over_is_half_open() {
        let e = Element::new(host()).at(10, 20).sized(30, 40);
        assert!(e.is_mouse_over(10, 20));
        assert!(!e.is_mouse_over(40, 20));
        assert!(!e.is_mouse_over(10, 60));
        assert!(e.is_mouse_over(39, 59));
    }

    #[test]
    fn behavior_lookup_by_type() {
        let log = Log::default();
        let mut e = Element::new(host()).with_behavior(Recorder::new("p", &log));
        assert_eq!(e.behavior::<Recorder>().map(|p| p.name), Some("p"));
        if let Some(p) = e.behavior_mut::<Recorder>() {
            p.captures = true;
        }
        assert!(e.behavior::<Recorder>().is_some_and(|p| p.captures));
    }
}
