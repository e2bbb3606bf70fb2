//! Warm amber color palette and styles.
//!
//! Colors chosen for:
//! - High contrast on dark terminal backgrounds
//! - Clear risk semantics (green = low, red = high)

use ratatui::style::{Color, Modifier, Style};

/// Scan theme color palette.
pub struct ScanTheme;

impl ScanTheme {
    // === Primary Colors ===

    /// Warm orange - Primary accent
    pub const PRIMARY: Color = Color::Rgb(255, 149, 0); // #FF9500

    /// Gold for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(255, 204, 0); // #FFCC00

    // === Semantic Colors ===

    /// Green - Low risk
    pub const SUCCESS: Color = Color::Rgb(76, 175, 80); // #4CAF50

    /// Amber - Intermediate
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24

    /// Red - High risk / errors
    pub const DANGER: Color = Color::Rgb(244, 67, 54); // #F44336

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for success messages
    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    /// Style for danger/error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the input cursor
    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a risk outcome.
    #[must_use]
    pub fn risk(high_risk: bool) -> Style {
        if high_risk {
            Self::danger()
        } else {
            Self::success()
        }
    }

    /// Gauge style for a risk probability.
    #[must_use]
    pub fn risk_gauge(probability: f64) -> Style {
        if probability < 0.3 {
            Self::success()
        } else if probability < 0.7 {
            Style::default().fg(Self::WARNING)
        } else {
            Self::danger()
        }
    }
}
