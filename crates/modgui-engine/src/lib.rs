//! modgui engine crate.
//!
//! Owns the collaborators the widget tree talks to: the [`host::Host`]
//! (screen metrics, depth, fonts), the [`render::Renderer`] draw primitives,
//! geometry, packed colors, and platform-agnostic input.

pub mod coords;
pub mod host;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;
