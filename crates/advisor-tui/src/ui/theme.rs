//! Theme and styling definitions for the advisor TUI.

use advisor_engine::{Role, Variant};
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(30, 30, 40);
    pub const FG: Color = Color::Rgb(220, 220, 230);
    pub const DIM: Color = Color::Rgb(140, 140, 160);

    // Accent colors
    pub const ACCENT: Color = Color::Rgb(130, 170, 255);
    pub const SECONDARY: Color = Color::Rgb(60, 64, 84);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(45, 45, 60);
    pub const STATUS_KEY_BG: Color = Color::Rgb(70, 90, 140);

    // Status colors
    pub const SUCCESS: Color = Color::Rgb(130, 220, 130);
    pub const ERROR: Color = Color::Rgb(240, 100, 100);

    // Border colors
    pub const BORDER: Color = Color::Rgb(80, 80, 100);
    pub const BORDER_ACTIVE: Color = Color::Rgb(130, 170, 255);
}

/// Glyphs used by the widget (ASCII so any terminal can draw them).
pub struct Symbols;

impl Symbols {
    pub const USER: &'static str = "(@)";
    pub const ASSISTANT: &'static str = "{#}";
    pub const CHAT_BUTTON: &'static str = "[=]";
    /// Frames of the pulsing brain shown while a reply is pending.
    pub const PULSE: [&'static str; 4] = ["{ }", "{.}", "{#}", "{.}"];
}

/// Icon for a message card header.
pub fn role_icon(role: Role) -> &'static str {
    match role {
        Role::User => Symbols::USER,
        Role::Assistant => Symbols::ASSISTANT,
    }
}

/// Pulse frame for the given tick.
pub fn pulse_frame(tick: usize) -> &'static str {
    Symbols::PULSE[tick % Symbols::PULSE.len()]
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Active/focused element.
    pub fn active() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// Success status.
    pub fn success() -> Style {
        Style::default().fg(Palette::SUCCESS).bg(Palette::BG)
    }

    /// Error status.
    pub fn error() -> Style {
        Style::default().fg(Palette::ERROR).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary button, enabled.
    pub fn button() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary button, disabled while a message is being sent.
    pub fn button_disabled() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::SECONDARY)
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }

    /// Border of a toast, by variant.
    pub fn toast_border(variant: Variant) -> Style {
        match variant {
            Variant::Default => Style::default().fg(Palette::SUCCESS),
            Variant::Destructive => Style::default().fg(Palette::ERROR),
        }
    }
}
