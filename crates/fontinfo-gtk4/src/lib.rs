//! fontinfo GTK4 - desktop backend for fontinfo-core
//!
//! Implements the fontinfo-core subsystem traits on top of GTK4 settings and
//! widgets, GSettings, Xlib and Fontconfig.

mod backend;
mod display;
mod fontconfig;
mod gsettings;
mod toolkit;

pub use backend::Gtk4Backend;
pub use display::XDisplay;
pub use fontconfig::FontconfigMatcher;
pub use gsettings::GioDesktop;
pub use toolkit::Gtk4Toolkit;

// Re-export fontinfo-core types for convenience
pub use fontinfo_core::*;
