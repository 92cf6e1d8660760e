//! Screen geometry shared by rendering and pointer hit-testing
//!
//! Every clickable or hoverable rectangle is computed here so the widgets and
//! the mouse handler always agree on where things are.

use super::app::{App, AppView};
use crate::features::{CounterButton, Faq, FocusTarget, Tabs};
use crate::form::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

/// Width of the theme toggle button in the header
pub const THEME_BUTTON_WIDTH: u16 = 14;
/// Rows an open FAQ answer occupies
pub const ANSWER_ROWS: u16 = 3;

/// Something the pointer can hover or click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View(usize),
    ThemeToggle,
    Counter(CounterButton),
    FaqQuestion(usize),
    Tab(usize),
    Card(usize),
    /// A form field, the terms checkbox or one of the form buttons
    Form(FocusTarget),
}

/// Top-level screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub tab_bar: Rect,
    pub theme_button: Rect,
    pub main: Rect,
    pub status: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(THEME_BUTTON_WIDTH)])
            .split(rows[0]);

        Self {
            tab_bar: header[0],
            theme_button: header[1],
            main: rows[1],
            status: rows[2],
        }
    }
}

/// Inside of a bordered block
pub fn framed(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// One-row slice of `area` at `row`, if it fits
pub fn row(area: Rect, row: u16) -> Option<Rect> {
    (row < area.height).then(|| Rect::new(area.x, area.y + row, area.width, 1))
}

/// Whether a cell lies inside a rectangle
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Cells of labels laid out left to right as ` label ` with a one-cell
/// separator; labels that do not fit are dropped.
pub fn label_cells(labels: &[&str], area: Rect) -> Vec<Rect> {
    let right = area.x + area.width;
    let mut x = area.x;
    let mut cells = Vec::with_capacity(labels.len());

    for label in labels {
        let width = label.chars().count() as u16 + 2;
        if x + width > right {
            break;
        }
        cells.push(Rect::new(x, area.y, width, 1));
        x += width + 1;
    }

    cells
}

/// Counter panel rows, relative to the panel's inner area
pub const COUNTER_VALUE_ROW: u16 = 1;
pub const COUNTER_HIGH_SCORE_ROW: u16 = 3;
pub const COUNTER_BUTTON_ROW: u16 = 5;

/// Home view: intro block on top, counter panel below
pub fn home_areas(main: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(main);
    (chunks[0], chunks[1])
}

/// Counter buttons inside the counter panel's inner area
pub fn counter_buttons(inner: Rect) -> Vec<(CounterButton, Rect)> {
    let Some(line) = row(inner, COUNTER_BUTTON_ROW) else {
        return Vec::new();
    };
    let labels: Vec<String> = CounterButton::all()
        .iter()
        .map(|b| format!("[{}]", b.label()))
        .collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let indented = Rect::new(line.x + 2, line.y, line.width.saturating_sub(2), 1);

    CounterButton::all()
        .iter()
        .copied()
        .zip(label_cells(&refs, indented))
        .collect()
}

/// Geometry of one FAQ entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqRow {
    pub index: usize,
    pub question: Rect,
    pub answer: Option<Rect>,
}

/// FAQ entries inside the panel's inner area; the open item pushes later
/// questions down by its answer.
pub fn faq_rows(inner: Rect, faq: &Faq) -> Vec<FaqRow> {
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    let mut rows = Vec::new();

    for index in 0..faq.items().len() {
        if y >= bottom {
            break;
        }
        let question = Rect::new(inner.x, y, inner.width, 1);
        y += 1;

        let answer = if faq.is_open(index) && y < bottom {
            let height = ANSWER_ROWS.min(bottom - y);
            let rect = Rect::new(inner.x + 4, y, inner.width.saturating_sub(4), height);
            y += height;
            Some(rect)
        } else {
            None
        };

        rows.push(FaqRow {
            index,
            question,
            answer,
        });
    }

    rows
}

/// Tab buttons sit on the second inner row; the first is left free for the
/// lift effect.
pub fn tab_buttons(inner: Rect, tabs: &Tabs) -> Vec<Rect> {
    let Some(line) = row(inner, 1) else {
        return Vec::new();
    };
    let titles: Vec<&str> = tabs.panels().iter().map(|p| p.title).collect();
    label_cells(&titles, line)
}

/// Panel body below the tab buttons
pub fn tab_panel(inner: Rect) -> Rect {
    let top = 3.min(inner.height);
    Rect::new(inner.x, inner.y + top, inner.width, inner.height - top)
}

/// Side-by-side card columns
pub fn card_areas(main: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(main)
        .to_vec()
}

/// Register view: fields panel on the left, strength meter and buttons on
/// the right
pub fn register_areas(main: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(main);
    (chunks[0], chunks[1])
}

/// Input row of each field inside the fields panel; the row below holds its
/// error message
pub fn register_field_rows(inner: Rect) -> Vec<(FieldId, Rect)> {
    FieldId::all()
        .iter()
        .filter_map(|&field| row(inner, field.index() as u16 * 2).map(|r| (field, r)))
        .collect()
}

/// First button row inside the sidebar; the strength meter sits above
pub const REGISTER_BUTTON_ROW: u16 = 3;

/// Register and Clear buttons inside the sidebar's inner area
pub fn register_buttons(inner: Rect) -> Vec<(FocusTarget, Rect)> {
    [FocusTarget::Submit, FocusTarget::Clear]
        .into_iter()
        .enumerate()
        .filter_map(|(i, target)| row(inner, REGISTER_BUTTON_ROW + i as u16 * 2).map(|r| (target, r)))
        .collect()
}

/// Every pointer target on screen for the current view
pub fn targets(app: &App, area: Rect) -> Vec<(Rect, Target)> {
    let page = PageLayout::new(area);
    let mut out = Vec::new();

    let names: Vec<&str> = AppView::all().iter().map(|v| v.name()).collect();
    for (i, cell) in label_cells(&names, page.tab_bar).into_iter().enumerate() {
        out.push((cell, Target::View(i)));
    }
    out.push((page.theme_button, Target::ThemeToggle));

    match app.view {
        AppView::Home => {
            let (_, counter) = home_areas(page.main);
            for (button, rect) in counter_buttons(framed(counter)) {
                out.push((rect, Target::Counter(button)));
            }
        }
        AppView::Faq => {
            for faq_row in faq_rows(framed(page.main), &app.faq) {
                out.push((faq_row.question, Target::FaqQuestion(faq_row.index)));
            }
        }
        AppView::Tabs => {
            for (i, rect) in tab_buttons(framed(page.main), &app.tabs).into_iter().enumerate() {
                out.push((rect, Target::Tab(i)));
            }
        }
        AppView::Cards => {
            let count = app.cards.cards().len();
            for (i, rect) in card_areas(page.main, count).into_iter().enumerate() {
                out.push((rect, Target::Card(i)));
            }
        }
        AppView::Register => {
            let (fields, sidebar) = register_areas(page.main);
            for (field, rect) in register_field_rows(framed(fields)) {
                out.push((rect, Target::Form(FocusTarget::Field(field))));
            }
            for (button, rect) in register_buttons(framed(sidebar)) {
                out.push((rect, Target::Form(button)));
            }
        }
        _ => {}
    }

    out
}

/// Target under a screen cell
pub fn target_at(app: &App, area: Rect, column: u16, row: u16) -> Option<Target> {
    targets(app, area)
        .into_iter()
        .find(|(rect, _)| hit(*rect, column, row))
        .map(|(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_layout_splits_header_main_status() {
        let page = PageLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(page.tab_bar, Rect::new(0, 0, 66, 1));
        assert_eq!(page.theme_button, Rect::new(66, 0, 14, 1));
        assert_eq!(page.main, Rect::new(0, 1, 80, 22));
        assert_eq!(page.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn label_cells_leave_separators() {
        let cells = label_cells(&["Home", "FAQ"], Rect::new(0, 0, 40, 1));
        assert_eq!(cells, vec![Rect::new(0, 0, 6, 1), Rect::new(7, 0, 5, 1)]);
    }

    #[test]
    fn label_cells_drop_overflow() {
        let cells = label_cells(&["Home", "Register"], Rect::new(0, 0, 10, 1));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn hit_is_half_open() {
        let rect = Rect::new(2, 3, 4, 1);
        assert!(hit(rect, 2, 3));
        assert!(hit(rect, 5, 3));
        assert!(!hit(rect, 6, 3));
        assert!(!hit(rect, 2, 4));
    }

    #[test]
    fn open_faq_item_pushes_later_questions_down() {
        let mut faq = Faq::default();
        let inner = Rect::new(1, 1, 60, 20);

        let closed = faq_rows(inner, &faq);
        assert_eq!(closed[1].question.y, 2);

        faq.activate(0);
        let open = faq_rows(inner, &faq);
        assert_eq!(open[0].answer.map(|a| a.height), Some(ANSWER_ROWS));
        assert_eq!(open[1].question.y, 2 + ANSWER_ROWS);
        assert!(open[1].answer.is_none());
    }

    #[test]
    fn counter_buttons_sit_on_button_row() {
        let inner = Rect::new(1, 1, 40, 8);
        let buttons = counter_buttons(inner);
        assert_eq!(buttons.len(), 3);
        assert!(buttons.iter().all(|(_, r)| r.y == 1 + COUNTER_BUTTON_ROW));
        assert_eq!(buttons[0].0, CounterButton::Decrement);
    }

    #[test]
    fn counter_buttons_need_room() {
        assert!(counter_buttons(Rect::new(0, 0, 40, 3)).is_empty());
    }

    #[test]
    fn register_targets_follow_field_order() {
        let inner = framed(register_areas(Rect::new(0, 1, 100, 28)).0);
        let rows = register_field_rows(inner);
        assert_eq!(rows.len(), FieldId::all().len());
        assert_eq!(rows[0], (FieldId::FullName, Rect::new(inner.x, inner.y, inner.width, 1)));
        assert_eq!(rows[7].0, FieldId::Terms);
        assert_eq!(rows[7].1.y, inner.y + 14);
    }

    #[test]
    fn register_buttons_sit_below_meter() {
        let buttons = register_buttons(Rect::new(71, 2, 28, 26));
        assert_eq!(buttons[0], (FocusTarget::Submit, Rect::new(71, 2 + REGISTER_BUTTON_ROW, 28, 1)));
        assert_eq!(buttons[1].0, FocusTarget::Clear);
        assert_eq!(buttons[1].1.y, 2 + REGISTER_BUTTON_ROW + 2);
        assert!(register_buttons(Rect::new(0, 0, 28, 3)).is_empty());
    }

    #[test]
    fn cards_share_width() {
        let areas = card_areas(Rect::new(0, 0, 90, 10), 3);
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().all(|a| a.width == 30));
    }
}
