//! The host environment the widget tree runs inside.
//!
//! A host reports the virtual GUI screen size (what elements are laid out
//! in), the raw display size (what the input device reports in), the base
//! render depth, font metrics, and which screen is currently shown. Every element receives a [`HostHandle`]
//! at construction instead of reaching for global engine state.

use std::cell::Cell;
use std::rc::Rc;

use crate::text::{FixedWidthFont, FontMetrics};

/// Screen and font information supplied by the embedding engine.
pub trait Host {
    /// GUI screen width in virtual pixels.
    fn screen_width(&self) -> i32;
    /// GUI screen height in virtual pixels.
    fn screen_height(&self) -> i32;
    /// Raw display width in device pixels.
    fn display_width(&self) -> i32;
    /// Raw display height in device pixels.
    fn display_height(&self) -> i32;
    /// Base render depth that element z offsets are added to.
    fn z_level(&self) -> f64;
    fn font(&self) -> &dyn FontMetrics;
    /// Name of the screen the host is currently showing, if it tracks one.
    fn active_screen(&self) -> Option<&str> {
        None
    }
}

/// Shared host reference held by every element of a tree.
pub type HostHandle = Rc<dyn Host>;

/// Converts raw device coordinates into GUI coordinates.
///
/// Device coordinates have their origin at the bottom-left corner; GUI
/// coordinates at the top-left. An axis whose display size is zero maps to 0.
pub fn scale_device_pos(host: &dyn Host, device_x: i32, device_y: i32) -> (i32, i32) {
    let (sw, sh) = (host.screen_width(), host.screen_height());
    let (dw, dh) = (host.display_width(), host.display_height());

    let x = if dw != 0 {
        (device_x as i64 * sw as i64 / dw as i64) as i32
    } else {
        log::warn!("host reports zero display width; mouse x pinned to 0");
        0
    };
    let y = if dh != 0 {
        (sh as i64 - device_y as i64 * sh as i64 / dh as i64 - 1) as i32
    } else {
        log::warn!("host reports zero display height; mouse y pinned to 0");
        0
    };
    (x, y)
}

/// A host without a window: all metrics are plain values that tests or a
/// headless driver can change between frames.
pub struct HeadlessHost {
    screen: Cell<(i32, i32)>,
    display: Cell<(i32, i32)>,
    z_level: Cell<f64>,
    font: Box<dyn FontMetrics>,
    screen_name: Option<String>,
}

impl HeadlessHost {
    /// Screen and display share the same size (1:1 device scaling).
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: Cell::new((width, height)),
            display: Cell::new((width, height)),
            z_level: Cell::new(0.0),
            font: Box::new(FixedWidthFont::default()),
            screen_name: None,
        }
    }

    pub fn with_display(self, width: i32, height: i32) -> Self {
        self.display.set((width, height));
        self
    }

    pub fn with_font(mut self, font: impl FontMetrics + 'static) -> Self {
        self.font = Box::new(font);
        self
    }

    pub fn with_z_level(self, z: f64) -> Self {
        self.z_level.set(z);
        self
    }

    pub fn with_screen_name(mut self, name: impl Into<String>) -> Self {
        self.screen_name = Some(name.into());
        self
    }

    pub fn set_screen_size(&self, width: i32, height: i32) {
        self.screen.set((width, height));
    }

    pub fn set_display_size(&self, width: i32, height: i32) {
        self.display.set((width, height));
    }

    pub fn set_z_level(&self, z: f64) {
        self.z_level.set(z);
    }

    /// Wraps the host into a shareable handle.
    pub fn into_handle(self) -> HostHandle {
        Rc::new(self)
    }
}

impl Host for HeadlessHost {
    fn screen_width(&self) -> i32 {
        self.screen.get().0
    }

    fn screen_height(&self) -> i32 {
        self.screen.get().1
    }

    fn display_width(&self) -> i32 {
        self.display.get().0
    }

    fn display_height(&self) -> i32 {
        self.display.get().1
    }

    fn z_level(&self) -> f64 {
        self.z_level.get()
    }

    fn font(&self) -> &dyn FontMetrics {
        self.font.as_ref()
    }

    fn active_screen(&self) -> Option<&str> {
        self.screen_name.as_deref()
    }
}
