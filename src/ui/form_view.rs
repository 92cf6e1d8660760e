//! Registration form rendering

use super::layout::{self, register_areas, register_buttons, register_field_rows};
use super::theme::{tone_color, ThemeColors};
use crate::features::{FocusTarget, RegistrationForm};
use crate::form::{FieldId, FieldSource, FieldState, StrengthTier};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};
use std::time::Instant;

const LABEL_WIDTH: u16 = 18;

/// Gauge plus caption for the password strength tier
pub struct StrengthMeter {
    tier: StrengthTier,
    colors: ThemeColors,
}

impl StrengthMeter {
    pub fn new(tier: StrengthTier, colors: ThemeColors) -> Self {
        Self { tier, colors }
    }
}

impl Widget for StrengthMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = tone_color(self.tier.tone());
        if let Some(bar) = layout::row(area, 0) {
            Gauge::default()
                .gauge_style(Style::default().fg(color).bg(self.colors.surface_hover))
                .percent(self.tier.width_percent())
                .label("")
                .render(bar, buf);
        }
        if let Some(caption) = layout::row(area, 1) {
            buf.set_stringn(
                caption.x,
                caption.y,
                self.tier.caption(),
                caption.width as usize,
                Style::default().fg(color),
            );
        }
    }
}

/// The whole registration section: fields on the left, strength meter and
/// buttons on the right, or the confirmation while it is showing
pub struct RegistrationPanel<'a> {
    form: &'a RegistrationForm,
    now: Instant,
    colors: ThemeColors,
}

impl<'a> RegistrationPanel<'a> {
    pub fn new(form: &'a RegistrationForm, now: Instant, colors: ThemeColors) -> Self {
        Self { form, now, colors }
    }

    fn render_confirmation(&self, area: Rect, buf: &mut Buffer) {
        let remaining = self
            .form
            .confirmation_remaining(self.now)
            .map(|d| d.as_secs() + 1)
            .unwrap_or(0);
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  ✓ Registration successful!",
                Style::default().fg(self.colors.green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Thank you for registering. Your information has been received.",
                Style::default().fg(self.colors.fg),
            )),
            Line::from(Span::styled(
                format!("  The form will reset in {}s.", remaining),
                Style::default().fg(self.colors.dim),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Registration ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.colors.green)),
        )
        .render(area, buf);
    }

    fn field_line(&self, field: FieldId, focused: bool) -> Line<'static> {
        let values = self.form.values();
        let state = self.form.board().state(field);

        let label_style = if focused {
            Style::default().fg(self.colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.fg)
        };
        let marker = match state {
            FieldState::Neutral => Span::raw("  "),
            FieldState::Valid => Span::styled(" ✓", Style::default().fg(self.colors.green)),
            FieldState::Invalid(_) => Span::styled(" ✗", Style::default().fg(self.colors.red)),
        };

        if !field.is_text() {
            let checkbox = if values.checked(field) { "[x] " } else { "[ ] " };
            let box_style = if focused {
                Style::default().fg(self.colors.bg).bg(self.colors.accent)
            } else {
                Style::default().fg(self.colors.fg)
            };
            return Line::from(vec![
                Span::styled(checkbox, box_style),
                Span::styled(field.label(), label_style),
                marker,
            ]);
        }

        let raw = values.text(field);
        let mut shown = if field.is_secret() {
            "•".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };
        if focused {
            shown.push('█');
        }
        let required = if field.is_optional() { "" } else { " *" };
        let label = format!("{}{}", field.label(), required);

        let input_style = match (focused, state) {
            (true, _) => Style::default().fg(self.colors.fg).bg(self.colors.surface_hover),
            (false, FieldState::Invalid(_)) => Style::default().fg(self.colors.red),
            _ => Style::default().fg(self.colors.fg),
        };

        Line::from(vec![
            Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH as usize),
                label_style,
            ),
            Span::styled(format!(" {} ", shown), input_style),
            marker,
        ])
    }

    fn render_fields(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Registration ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let focus = self.form.focus();
        for (field, line) in register_field_rows(inner) {
            let focused = focus == FocusTarget::Field(field);
            buf.set_line(
                line.x + 1,
                line.y,
                &self.field_line(field, focused),
                line.width.saturating_sub(1),
            );
            if let Some(message) = self.form.board().state(field).error_message() {
                if let Some(line) = layout::row(inner, field.index() as u16 * 2 + 1) {
                    buf.set_stringn(
                        line.x + 3,
                        line.y,
                        message,
                        line.width.saturating_sub(3) as usize,
                        Style::default().fg(self.colors.red),
                    );
                }
            }
        }
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Password & Actions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let meter_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(2));
        StrengthMeter::new(self.form.board().strength_tier(), self.colors).render(meter_area, buf);

        let focus = self.form.focus();
        let busy = self.form.is_busy(self.now);
        for (target, line) in register_buttons(inner) {
            let label = match target {
                FocusTarget::Submit => self.form.submit_label(self.now),
                _ => "Clear",
            };
            let style = if focus == target {
                Style::default()
                    .fg(self.colors.bg)
                    .bg(self.colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else if busy && target == FocusTarget::Submit {
                Style::default().fg(self.colors.dim).bg(self.colors.surface_hover)
            } else {
                Style::default().fg(self.colors.fg).bg(self.colors.surface_hover)
            };
            buf.set_stringn(line.x, line.y, format!(" [ {} ] ", label), line.width as usize, style);
        }

        let errors = self.form.board().error_count();
        if errors > 0 {
            if let Some(line) = layout::row(inner, 8) {
                buf.set_stringn(
                    line.x,
                    line.y,
                    format!("{} field(s) need attention", errors),
                    line.width as usize,
                    Style::default().fg(self.colors.red),
                );
            }
        }
    }
}

impl<'a> Widget for RegistrationPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.form.is_confirming(self.now) {
            self.render_confirmation(area, buf);
            return;
        }

        let (fields, sidebar) = register_areas(area);
        self.render_fields(fields, buf);
        self.render_sidebar(sidebar, buf);
    }
}
