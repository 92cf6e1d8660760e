//! Page chrome: tab bar, theme button, status bar, help screen

use super::layout::label_cells;
use super::theme::ThemeColors;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Section navigation across the top of the page
pub struct TabBar<'a> {
    tabs: &'a [&'a str],
    selected: usize,
    colors: ThemeColors,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a [&'a str], selected: usize, colors: ThemeColors) -> Self {
        Self {
            tabs,
            selected,
            colors,
        }
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let bar_style = Style::default().bg(self.colors.surface).fg(self.colors.fg);
        buf.set_style(area, bar_style);

        for (i, cell) in label_cells(self.tabs, area).into_iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(self.colors.bg)
                    .bg(self.colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                bar_style
            };
            buf.set_string(cell.x, cell.y, format!(" {} ", self.tabs[i]), style);

            let sep_x = cell.x + cell.width;
            if i + 1 < self.tabs.len() && sep_x < area.x + area.width {
                buf.set_string(sep_x, cell.y, "|", Style::default().fg(self.colors.dim));
            }
        }
    }
}

/// Header button that switches between light and dark themes
pub struct ThemeButton<'a> {
    label: &'a str,
    hovered: bool,
    colors: ThemeColors,
}

impl<'a> ThemeButton<'a> {
    pub fn new(label: &'a str, hovered: bool, colors: ThemeColors) -> Self {
        Self {
            label,
            hovered,
            colors,
        }
    }
}

impl<'a> Widget for ThemeButton<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Hover "scales" the button: brackets widen and the text goes bold
        let (text, style) = if self.hovered {
            (
                format!("[ {} ]", self.label),
                Style::default()
                    .fg(self.colors.bg)
                    .bg(self.colors.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                format!(" {} ", self.label),
                Style::default().fg(self.colors.accent).bg(self.colors.surface),
            )
        };
        buf.set_style(area, Style::default().bg(self.colors.surface));
        let width = text.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width);
        buf.set_stringn(x, area.y, &text, area.width as usize, style);
    }
}

/// Status bar widget
pub struct StatusBar<'a> {
    view: &'a str,
    elapsed: &'a str,
    events: u64,
    message: Option<&'a str>,
    colors: ThemeColors,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: &'a str, elapsed: &'a str, events: u64, colors: ThemeColors) -> Self {
        Self {
            view,
            elapsed,
            events,
            message: None,
            colors,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let bg_style = Style::default().bg(self.colors.surface_hover).fg(self.colors.fg);
        buf.set_style(area, bg_style);

        // Left side: current section
        let left = format!(" {} ", self.view);
        buf.set_stringn(
            area.x,
            area.y,
            &left,
            area.width as usize,
            bg_style.add_modifier(Modifier::BOLD),
        );

        // Center: message if any
        if let Some(msg) = self.message {
            let msg_style = bg_style.fg(self.colors.accent);
            let msg_len = msg.chars().count() as u16;
            let msg_x = area.x + (area.width / 2).saturating_sub(msg_len / 2);
            buf.set_stringn(msg_x, area.y, msg, area.width as usize, msg_style);
        }

        // Right side: elapsed time and events
        let right = format!(" {} | Events: {} ", self.elapsed, self.events);
        let right_x = area.x + area.width.saturating_sub(right.len() as u16);
        buf.set_stringn(right_x, area.y, &right, area.width as usize, bg_style);
    }
}

/// Widget for the help screen
pub struct HelpPanel {
    colors: ThemeColors,
}

impl HelpPanel {
    pub fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }
}

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Help - Interactive Page ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.accent));

        let inner = block.inner(area);
        block.render(area, buf);

        let help_text = [
            "",
            " NAVIGATION",
            " -----------",
            " F1-F7 / PgUp / PgDn : Jump between sections (works everywhere)",
            " Tab / Shift+Tab     : Next/previous section (outside text entry)",
            " Ctrl+T              : Toggle light/dark theme (t outside text entry)",
            " Esc / Ctrl+C        : Quit (q outside text entry)",
            "",
            " SECTIONS",
            " -----------",
            " Home     : + / - / 0 change or reset the counter",
            " Cards    : Left/Right or the mouse to hover a card",
            " FAQ      : Up/Down to move, Enter to open or close",
            " Tabs     : Left/Right or 1-3 to switch panels",
            " Register : Tab/Up/Down move between fields, Space ticks the terms,",
            "            Enter submits (or clears on the Clear button)",
            " Typing   : Type freely; characters, words and the last key update live",
        ];

        for (i, line) in help_text.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let style = if line.contains("---") {
                Style::default().fg(self.colors.dim)
            } else if line.len() > 1 && line[1..].chars().all(|c| c.is_ascii_uppercase()) {
                Style::default()
                    .fg(self.colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.colors.fg)
            };
            buf.set_stringn(inner.x, inner.y + i as u16, line, inner.width as usize, style);
        }
    }
}
