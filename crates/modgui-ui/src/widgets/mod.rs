pub mod panel;

pub use panel::Panel;
