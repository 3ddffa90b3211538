//! TUI Theme - Consistent, elegant styling
//!
//! Soft cyan for the user and primary chrome, green for the bot,
//! and a loud red treatment reserved for urgent replies.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Bot message prefix style
pub fn bot_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// Timestamp next to each message
pub fn timestamp() -> Style {
    Style::default().fg(MUTED)
}

/// Urgent bot reply: badge and prefix
pub fn urgent_badge() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Urgent bot reply: body text
pub fn urgent_text() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Link label inside a bot reply
pub fn link() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}

/// Link target shown after the label
pub fn link_target() -> Style {
    Style::default().fg(MUTED)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
