//! TUI widgets

pub mod status_bar;
pub mod toast;

pub use status_bar::StatusBar;
pub use toast::ToastStack;
