//! Reusable widgets for the advisor TUI.

pub mod message_card;
pub mod status_bar;
pub mod text_input;
pub mod toast;

pub use message_card::TranscriptView;
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::TextInputState;
pub use toast::ToastStack;
