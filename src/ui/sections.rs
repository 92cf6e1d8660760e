//! Widgets for the page sections

use super::layout::{
    self, card_areas, counter_buttons, faq_rows, framed, home_areas, tab_buttons, tab_panel,
    COUNTER_HIGH_SCORE_ROW, COUNTER_VALUE_ROW,
};
use super::theme::{ThemeColors, ACCENT, WARNING};
use crate::features::{CounterGame, Faq, HoverCards, Tabs, TypingStats};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::time::Instant;

fn panel<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
}

/// Intro text and the counter game
pub struct HomePanel<'a> {
    counter: &'a CounterGame,
    now: Instant,
    colors: ThemeColors,
}

impl<'a> HomePanel<'a> {
    pub fn new(counter: &'a CounterGame, now: Instant, colors: ThemeColors) -> Self {
        Self {
            counter,
            now,
            colors,
        }
    }
}

impl<'a> Widget for HomePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (intro_area, counter_area) = home_areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome to the interactive page",
                Style::default().fg(self.colors.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Every section reacts to your keys and mouse. Press ? for help.",
                Style::default().fg(self.colors.dim),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(panel(" Home ", &self.colors))
        .render(intro_area, buf);

        let block = panel(" Counter Game ", &self.colors);
        let inner = block.inner(counter_area);
        block.render(counter_area, buf);

        if let Some(line) = layout::row(inner, 0) {
            buf.set_stringn(
                line.x + 2,
                line.y,
                "Current count",
                line.width.saturating_sub(2) as usize,
                Style::default().fg(self.colors.dim),
            );
        }

        if let Some(line) = layout::row(inner, COUNTER_VALUE_ROW) {
            let color = self.colors.value_color(self.counter.value_tone(self.now));
            buf.set_stringn(
                line.x + 2,
                line.y,
                self.counter.count().to_string(),
                line.width.saturating_sub(2) as usize,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
        }

        if let Some(line) = layout::row(inner, COUNTER_HIGH_SCORE_ROW) {
            let score_style = if self.counter.is_high_score_flashing(self.now) {
                Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.colors.fg)
            };
            let text = Line::from(vec![
                Span::styled("High score: ", Style::default().fg(self.colors.dim)),
                Span::styled(self.counter.high_score().to_string(), score_style),
            ]);
            buf.set_line(line.x + 2, line.y, &text, line.width.saturating_sub(2));
        }

        for (button, rect) in counter_buttons(inner) {
            let style = if self.counter.is_pressed(button, self.now) {
                Style::default()
                    .fg(self.colors.bg)
                    .bg(self.colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.colors.fg).bg(self.colors.surface_hover)
            };
            buf.set_stringn(
                rect.x,
                rect.y,
                format!(" [{}] ", button.label()),
                rect.width as usize,
                style,
            );
        }
    }
}

/// Cards that lift and reveal their info while hovered
pub struct CardsPanel<'a> {
    cards: &'a HoverCards,
    colors: ThemeColors,
}

impl<'a> CardsPanel<'a> {
    pub fn new(cards: &'a HoverCards, colors: ThemeColors) -> Self {
        Self { cards, colors }
    }
}

impl<'a> Widget for CardsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = card_areas(area, self.cards.cards().len());

        for (i, (card, column)) in self.cards.cards().iter().zip(areas).enumerate() {
            let revealed = self.cards.is_revealed(i);
            // Idle cards sit one row lower; a hovered card lifts into it
            let card_area = if revealed || column.height < 2 {
                column
            } else {
                Rect::new(column.x, column.y + 1, column.width, column.height - 1)
            };

            let (border, bg) = if revealed {
                (self.colors.accent, self.colors.surface_hover)
            } else {
                (self.colors.border, self.colors.surface)
            };
            let block = Block::default()
                .title(format!(" {} ", card.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg));

            let mut lines = vec![Line::from(Span::styled(
                card.summary,
                Style::default().fg(self.colors.fg).add_modifier(Modifier::BOLD),
            ))];
            if revealed {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    card.info,
                    Style::default().fg(self.colors.fg),
                )));
            }

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(card_area, buf);
        }
    }
}

/// Accordion of questions and answers
pub struct FaqPanel<'a> {
    faq: &'a Faq,
    colors: ThemeColors,
}

impl<'a> FaqPanel<'a> {
    pub fn new(faq: &'a Faq, colors: ThemeColors) -> Self {
        Self { faq, colors }
    }
}

impl<'a> Widget for FaqPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        panel(" Frequently Asked Questions ", &self.colors).render(area, buf);
        let inner = framed(area);

        for faq_row in faq_rows(inner, self.faq) {
            let item = &self.faq.items()[faq_row.index];
            let open = self.faq.is_open(faq_row.index);
            let marker = if open { "▾" } else { "▸" };
            let style = if self.faq.is_highlighted(faq_row.index) {
                Style::default()
                    .fg(self.colors.fg)
                    .bg(self.colors.surface_hover)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.colors.fg)
            };
            buf.set_style(faq_row.question, style);
            buf.set_stringn(
                faq_row.question.x,
                faq_row.question.y,
                format!(" {} {}", marker, item.question),
                faq_row.question.width as usize,
                style,
            );

            if let Some(answer) = faq_row.answer {
                Paragraph::new(item.answer)
                    .style(Style::default().fg(self.colors.dim))
                    .wrap(Wrap { trim: true })
                    .render(answer, buf);
            }
        }
    }
}

/// Tab buttons with the active panel beneath
pub struct TabsPanel<'a> {
    tabs: &'a Tabs,
    now: Instant,
    colors: ThemeColors,
}

impl<'a> TabsPanel<'a> {
    pub fn new(tabs: &'a Tabs, now: Instant, colors: ThemeColors) -> Self {
        Self { tabs, now, colors }
    }
}

impl<'a> Widget for TabsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        panel(" Tabs ", &self.colors).render(area, buf);
        let inner = framed(area);

        for (i, rect) in tab_buttons(inner, self.tabs).into_iter().enumerate() {
            let title = self.tabs.panels()[i].title;
            let active = i == self.tabs.active();
            let style = if active {
                Style::default()
                    .fg(self.colors.bg)
                    .bg(self.colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.colors.fg).bg(self.colors.surface_hover)
            };
            // A freshly activated button is drawn one row higher
            let y = if self.tabs.is_lifted(i, self.now) {
                rect.y.saturating_sub(1).max(inner.y)
            } else {
                rect.y
            };
            buf.set_stringn(rect.x, y, format!(" {} ", title), rect.width as usize, style);
        }

        if let Some(active) = self.tabs.active_panel() {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    active.title,
                    Style::default().fg(self.colors.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(active.body, Style::default().fg(self.colors.fg))),
            ])
            .wrap(Wrap { trim: true })
            .render(tab_panel(inner), buf);
        }
    }
}

/// Typing area with live statistics
pub struct TypingPanel<'a> {
    typing: &'a TypingStats,
    now: Instant,
    colors: ThemeColors,
}

impl<'a> TypingPanel<'a> {
    pub fn new(typing: &'a TypingStats, now: Instant, colors: ThemeColors) -> Self {
        Self {
            typing,
            now,
            colors,
        }
    }
}

impl<'a> Widget for TypingPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(26)])
            .split(area);

        let border = if self.typing.is_focused() {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.border)
        };
        let mut text: Vec<Line> = self.typing.text().split('\n').map(Line::from).collect();
        if self.typing.is_focused() {
            if let Some(last) = text.last_mut() {
                last.push_span(Span::styled("█", Style::default().fg(ACCENT)));
            }
        }
        Paragraph::new(text)
            .style(Style::default().fg(self.colors.fg))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Typing Area ")
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .render(chunks[0], buf);

        let key_style = if self.typing.is_key_flashing(self.now) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.fg)
        };
        let label = Style::default().fg(self.colors.dim);
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Characters: ", label),
                Span::styled(self.typing.char_count().to_string(), Style::default().fg(self.colors.fg)),
            ]),
            Line::from(vec![
                Span::styled("Words:      ", label),
                Span::styled(self.typing.word_count().to_string(), Style::default().fg(self.colors.fg)),
            ]),
            Line::from(vec![
                Span::styled("Last key:   ", label),
                Span::styled(self.typing.last_key().unwrap_or("-").to_string(), key_style),
            ]),
        ])
        .block(panel(" Stats ", &self.colors))
        .render(chunks[1], buf);
    }
}
