use std::cell::Cell;
use std::rc::Rc;

use modgui_engine::host::HeadlessHost;
use modgui_engine::input::{ButtonState, InputEvent};
use modgui_engine::logging::{init_logging, LoggingConfig};
use modgui_engine::render::{DrawCmd, DrawList};
use modgui_ui::prelude::*;

const SCREEN: (i32, i32) = (320, 240);
const DISPLAY: (i32, i32) = (640, 480);

/// Side length of the close box drawn in a window's top-right corner.
const CLOSE_BOX: i32 = 9;

/// Removes the window it is attached to when its corner box is pressed.
struct CloseBox;

impl CloseBox {
    fn bounds(state: &ElementState) -> Rect {
        let r = state.rect();
        Rect::new(r.right() - CLOSE_BOX - 2, r.y + 2, CLOSE_BOX, CLOSE_BOX)
    }
}

impl Behavior for CloseBox {
    fn render(&mut self, layer: RenderLayer, cx: &mut ElementCx<'_>, painter: &mut Painter<'_>, _args: RenderArgs) {
        if layer == RenderLayer::Foreground {
            let b = Self::bounds(cx.state);
            painter.draw_coloured_rect(b.x as f64, b.y as f64, b.width as f64, b.height as f64, Argb(0xFFAA_2222));
            painter.draw_centered_string("x", b.x + b.width / 2, b.y + 1, Argb::WHITE, false);
        }
    }

    fn on_click_check(&mut self, cx: &mut ElementCx<'_>, ev: PointerEvent) -> bool {
        if !Self::bounds(cx.state).contains(ev.x, ev.y) {
            return false;
        }
        log::info!("close pressed on {:?}", cx.state.id);
        cx.state.schedule_removal();
        true
    }
}

/// Device pixels (bottom-left origin) for a GUI point.
fn device(x: i32, y: i32) -> (i32, i32) {
    let (sw, sh) = SCREEN;
    let (dw, dh) = DISPLAY;
    (x * dw / sw, (sh - y - 1) * dh / sh)
}

fn button(state: ButtonState, x: i32, y: i32) -> InputEvent {
    let (x, y) = device(x, y);
    InputEvent::PointerButton { button: MouseButton::Left, state, x, y }
}

fn moved(x: i32, y: i32) -> InputEvent {
    let (x, y) = device(x, y);
    InputEvent::PointerMoved { x, y }
}

fn build_window(host: &HostHandle, moves: Rc<Cell<u32>>) -> Element {
    let body = Element::new(host.clone())
        .at(14, 34)
        .sized(92, 30)
        .in_group("content")
        .with_behavior(Panel::new().fill(0xFF20_2830u32).title("drag the bar"));

    // CloseBox goes first so a press on it never starts a drag.
    Element::new(host.clone())
        .at(10, 10)
        .sized(100, 60)
        .with_id("window")
        .with_z_offset(10.0)
        .with_behavior(CloseBox)
        .with_behavior(Draggable::new().on_moved(move || moves.set(moves.get() + 1)))
        .with_behavior(Panel::new().title("modgui").border(0xFF80_80A0u32, 2).opaque(true))
        .with_child(body)
}

fn summarize(tick: u32, list: &DrawList) {
    let fills = list.items().iter().filter(|c| matches!(c, DrawCmd::Fill { .. })).count();
    log::info!("tick {tick}: {} commands ({fills} fills), texts {:?}", list.len(), list.texts());
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let host = HeadlessHost::new(SCREEN.0, SCREEN.1)
        .with_display(DISPLAY.0, DISPLAY.1)
        .with_z_level(100.0)
        .with_screen_name("demo")
        .into_handle();

    let moves = Rc::new(Cell::new(0));
    let mut screen = ModularScreen::new(host.clone());
    screen.add_element(build_window(&host, moves.clone()));
    screen.init();

    let script: Vec<Vec<InputEvent>> = vec![
        vec![button(ButtonState::Pressed, 20, 15), moved(60, 40), moved(500, 40)],
        vec![button(ButtonState::Released, 500, 40), moved(10, 10)],
        vec![InputEvent::KeyTyped { ch: 'h', key: Key::Character }],
        vec![button(ButtonState::Pressed, 312, 40), button(ButtonState::Released, 312, 40)],
        vec![],
    ];

    let mut list = DrawList::new();
    for (tick, events) in script.iter().enumerate() {
        list.clear();
        screen.frame(events, &mut list, 0.0)?;
        summarize(tick as u32, &list);

        if let Some(window) = screen.root().child_by_id("window") {
            log::info!("window at {:?}, moved {} times", window.state().pos(), moves.get());
        }
    }

    let windows = screen.root().children().len();
    println!("done: {windows} window(s) left, window moved {} times", moves.get());
    Ok(())
}
