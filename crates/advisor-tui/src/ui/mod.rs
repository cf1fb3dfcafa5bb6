//! UI module for the advisor TUI.

pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::*;
pub use theme::*;
