//! UI layer for the roster window: app shell, panels and form widgets.

pub mod app;
pub mod panels;
pub mod widgets;

pub use app::DesktopGuiApp;
