//! Theme and styles
//!
//! Zinc greys with a gold accent.

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Brand gold
pub const GOLD: Color = Color::Rgb(212, 175, 55);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// Palette of the active theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    /// Placeholder blocks while a page loads
    pub skeleton: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(9, 9, 11),
            fg: Color::Rgb(244, 244, 245),
            border: Color::Rgb(39, 39, 42),
            border_focused: GOLD,
            accent: GOLD,
            selected_bg: Color::Rgb(39, 39, 42),
            selected_fg: Color::Rgb(250, 250, 250),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),
            muted: Color::Rgb(113, 113, 122),
            skeleton: Color::Rgb(39, 39, 42),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(24, 24, 27),
            border: Color::Rgb(212, 212, 216),
            border_focused: Color::Rgb(161, 128, 24),
            accent: Color::Rgb(161, 128, 24),
            selected_bg: Color::Rgb(244, 236, 208),
            selected_fg: Color::Black,
            success: Color::Rgb(21, 128, 61),
            warning: Color::Rgb(161, 98, 7),
            error: Color::Rgb(185, 28, 28),
            muted: Color::Rgb(113, 113, 122),
            skeleton: Color::Rgb(228, 228, 231),
        }
    }
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// Gold column headers and labels
    pub fn accent() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.selected_bg).fg(c.fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }
}
