//! Light/dark theme switch

use crate::config::Theme;
use log::info;

#[derive(Debug, Clone)]
pub struct ThemeToggle {
    theme: Theme,
    hovered: bool,
}

impl ThemeToggle {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            hovered: false,
        }
    }

    /// Flip the theme and return the new one
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        info!("Theme changed to: {}", self.theme.name());
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Button text names the theme a click switches to
    pub fn label(&self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}
