//! Theme color definitions for the UI
//!
//! Provides dark and light color palettes that can be switched at runtime.

use crate::config::Theme;
use crate::features::ValueTone;
use crate::form::Tone;
use ratatui::style::Color;

/// Page red, used for errors, negative counts and weak passwords
pub const DANGER: Color = Color::Rgb(0xe7, 0x4c, 0x3c);
/// Page orange, used for warnings and the high-score flash
pub const WARNING: Color = Color::Rgb(0xf3, 0x9c, 0x12);
/// Page green, used for success markers and winning counts
pub const SUCCESS: Color = Color::Rgb(0x27, 0xae, 0x60);
/// Page blue, used for focus and the last-key flash
pub const ACCENT: Color = Color::Rgb(0x34, 0x98, 0xdb);

/// Complete color palette for the UI
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Primary foreground text
    pub fg: Color,
    /// Dimmed/secondary text
    pub dim: Color,
    /// Headings, focus rings, active tab
    pub accent: Color,
    /// Success marker
    pub green: Color,
    /// Warning and highlight
    pub yellow: Color,
    /// Error marker
    pub red: Color,
    /// Raised surfaces: cards, buttons, inputs
    pub surface: Color,
    /// Surface under the pointer
    pub surface_hover: Color,
    /// Idle borders
    pub border: Color,
}

impl ThemeColors {
    /// Create a color palette for the given theme variant
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(26, 26, 46),
            fg: Color::Rgb(224, 224, 224),
            dim: Color::Rgb(120, 120, 140),
            accent: ACCENT,
            green: Color::Rgb(46, 204, 113),
            yellow: WARNING,
            red: Color::Rgb(240, 90, 80),
            surface: Color::Rgb(22, 33, 62),
            surface_hover: Color::Rgb(15, 52, 96),
            border: Color::Rgb(70, 70, 100),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 249, 250),
            fg: Color::Rgb(44, 62, 80),
            dim: Color::Rgb(127, 140, 141),
            accent: ACCENT,
            green: SUCCESS,
            yellow: Color::Rgb(200, 120, 0),
            red: DANGER,
            surface: Color::Rgb(255, 255, 255),
            surface_hover: Color::Rgb(233, 236, 239),
            border: Color::Rgb(206, 212, 218),
        }
    }

    /// Color of the counter value
    pub fn value_color(&self, tone: ValueTone) -> Color {
        match tone {
            ValueTone::Normal => self.fg,
            ValueTone::Winning => SUCCESS,
            ValueTone::Negative | ValueTone::ResetFlash => DANGER,
        }
    }
}

/// Fixed color of a password strength tone, the same in both themes
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Danger => DANGER,
        Tone::Warning => WARNING,
        Tone::Success => SUCCESS,
    }
}
