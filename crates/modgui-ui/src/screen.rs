use modgui_engine::host::{scale_device_pos, HostHandle};
use modgui_engine::input::{ButtonState, InputEvent, PointerState, RawMouseEvent};
use modgui_engine::render::Renderer;

use crate::element::Element;
use crate::event::RenderLayer;

// ── ModularScreen ─────────────────────────────────────────────────────────

/// Top-level coordinator owning the root element of a screen.
///
/// Turns a stream of device-level [`InputEvent`]s into tree dispatch calls,
/// and renders the whole tree one layer at a time so every background is
/// drawn before any foreground, and every foreground before any overlay.
///
/// # Example
///
/// ```rust,ignore
/// let host = HeadlessHost::new(320, 240).into_handle();
/// let mut screen = ModularScreen::new(host.clone());
/// screen.add_element(Element::new(host).sized(100, 60).with_behavior(Draggable::new()));
/// screen.init();
///
/// // Each tick:
/// let mut list = DrawList::new();
/// screen.frame(&events, &mut list, 0.0)?;
/// ```
pub struct ModularScreen {
    host: HostHandle,
    root: Element,
    pointer: PointerState,
    /// Last pointer position in GUI pixels.
    mouse: (i32, i32),
}

impl ModularScreen {
    /// Creates a screen whose root covers the host's GUI screen.
    pub fn new(host: HostHandle) -> Self {
        let root = Element::new(host.clone()).sized(host.screen_width(), host.screen_height());
        Self { host, root, pointer: PointerState::new(), mouse: (0, 0) }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn host(&self) -> &HostHandle {
        &self.host
    }

    /// Last pointer position in GUI pixels.
    pub fn mouse_pos(&self) -> (i32, i32) {
        self.mouse
    }

    pub fn add_element(&mut self, element: Element) -> &mut Self {
        self.root.add_child(element);
        self
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    pub fn init(&mut self) {
        log::debug!("initializing screen {:?}", self.host.active_screen().unwrap_or("<unnamed>"));
        self.root.init_element();
    }

    /// Matches the root to the host's current screen size and reloads the
    /// whole tree.
    pub fn resize(&mut self) {
        let (w, h) = (self.host.screen_width(), self.host.screen_height());
        log::debug!("screen resized to {w}x{h}");
        self.root.set_size(w, h);
    }

    pub fn update(&mut self) {
        self.root.on_update();
    }

    /// Draws the background pass over the whole tree, then foreground, then
    /// overlay.
    pub fn render(&mut self, renderer: &mut dyn Renderer, mouse_x: i32, mouse_y: i32, partial_ticks: f32) {
        for layer in RenderLayer::ALL {
            match layer {
                RenderLayer::Background => self.root.render_background_layer(renderer, mouse_x, mouse_y, partial_ticks),
                RenderLayer::Foreground => self.root.render_foreground_layer(renderer, mouse_x, mouse_y, partial_ticks),
                RenderLayer::Overlay => self.root.render_overlay_layer(renderer, mouse_x, mouse_y, partial_ticks),
            }
        }
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Routes one device event into the tree.
    ///
    /// Pointer motion and buttons are first offered raw through
    /// [`Element::handle_mouse_input`]; the click, drag and release calls
    /// only run if nothing captured them there. Returns whether the event was
    /// captured. Errors from key handlers are passed through.
    pub fn dispatch(&mut self, event: &InputEvent) -> anyhow::Result<bool> {
        // Read before `apply` so a release still knows the held button.
        let held = self.pointer.held_button().zip(self.pointer.held_for());
        self.pointer.apply(event);

        let captured = match *event {
            InputEvent::PointerMoved { x, y } => {
                let (mx, my) = self.to_gui(x, y);
                if self.root.handle_mouse_input(&RawMouseEvent { x, y, dwheel: 0 }) {
                    return Ok(true);
                }
                match held {
                    Some((button, held_for)) => self.root.mouse_click_move(mx, my, button, held_for),
                    None => false,
                }
            }
            InputEvent::PointerButton { button, state, x, y } => {
                let (mx, my) = self.to_gui(x, y);
                if self.root.handle_mouse_input(&RawMouseEvent { x, y, dwheel: 0 }) {
                    return Ok(true);
                }
                match state {
                    ButtonState::Pressed => self.root.mouse_clicked(mx, my, button),
                    ButtonState::Released => self.root.mouse_released(mx, my, button),
                }
            }
            InputEvent::Wheel { x, y, dwheel } => {
                self.to_gui(x, y);
                self.root.handle_mouse_input(&RawMouseEvent { x, y, dwheel })
            }
            InputEvent::KeyTyped { ch, key } => self.root.key_typed(ch, key)?,
        };

        if captured {
            log::trace!("{event:?} captured");
        }
        Ok(captured)
    }

    /// Runs one tick: update, dispatch `events` in order, render.
    pub fn frame(&mut self, events: &[InputEvent], renderer: &mut dyn Renderer, partial_ticks: f32) -> anyhow::Result<()> {
        self.update();
        for event in events {
            self.dispatch(event)?;
        }
        let (mx, my) = self.mouse;
        self.render(renderer, mx, my, partial_ticks);
        Ok(())
    }

    /// Scales device coordinates and records them as the current mouse position.
    fn to_gui(&mut self, x: i32, y: i32) -> (i32, i32) {
        self.mouse = scale_device_pos(&*self.host, x, y);
        self.mouse
    }
}
