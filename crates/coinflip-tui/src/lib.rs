//! coinflip-tui - Terminal UI for Coinflip
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering, the status-bar and toast widgets, and the run loop that drives
//! the flip engine from coinflip-app.

pub mod event;
pub mod render;
pub mod runner;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
