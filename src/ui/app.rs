//! Main application state and event dispatch

use super::layout::{self, Target};
use super::theme::ThemeColors;
use crate::config::Config;
use crate::features::{
    is_command_chord, CounterButton, CounterGame, Faq, FocusTarget, HoverCards,
    RegistrationForm, Tabs, ThemeToggle, TypingStats,
};
use crate::form::{FieldId, FormOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::layout::Rect;
use std::time::Instant;

/// Current section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Home,
    Cards,
    Faq,
    Tabs,
    Register,
    Typing,
    Help,
}

impl AppView {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cards => "Cards",
            Self::Faq => "FAQ",
            Self::Tabs => "Tabs",
            Self::Register => "Register",
            Self::Typing => "Typing",
            Self::Help => "Help",
        }
    }

    pub fn all() -> &'static [AppView] {
        &[
            Self::Home,
            Self::Cards,
            Self::Faq,
            Self::Tabs,
            Self::Register,
            Self::Typing,
            Self::Help,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Cards => 1,
            Self::Faq => 2,
            Self::Tabs => 3,
            Self::Register => 4,
            Self::Typing => 5,
            Self::Help => 6,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Home,
            1 => Self::Cards,
            2 => Self::Faq,
            3 => Self::Tabs,
            4 => Self::Register,
            5 => Self::Typing,
            _ => Self::Help,
        }
    }

    /// Views where printable keys are text input rather than shortcuts
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Self::Register | Self::Typing)
    }
}

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Main application
pub struct App {
    /// Current view
    pub view: AppView,
    /// Application state
    pub state: AppState,
    /// Configuration
    pub config: Config,
    /// Light/dark switch
    pub theme: ThemeToggle,
    /// Counter game on the home section
    pub counter: CounterGame,
    /// FAQ accordion
    pub faq: Faq,
    /// Tabbed panels
    pub tabs: Tabs,
    /// Hover cards
    pub cards: HoverCards,
    /// Registration form
    pub registration: RegistrationForm,
    /// Typing area
    pub typing: TypingStats,
    /// Application start time
    pub start_time: Instant,
    /// Total key presses and clicks handled
    pub total_events: u64,
    /// Last status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            view: AppView::Home,
            state: AppState::Running,
            theme: ThemeToggle::new(config.ui.theme),
            counter: CounterGame::new(&config),
            faq: Faq::default(),
            tabs: Tabs::default().lift_duration(config.effects.tab_lift()),
            cards: HoverCards::default(),
            registration: RegistrationForm::new(&config),
            typing: TypingStats::new(config.effects.last_key_flash()),
            config,
            start_time: Instant::now(),
            total_events: 0,
            status_message: None,
            status_time: None,
        }
    }

    pub fn set_view(&mut self, view: AppView) {
        if view != self.view {
            debug!("View changed to {}", view.name());
        }
        self.view = view;
        self.typing.set_focused(view == AppView::Typing);
    }

    /// Switch to the next view
    pub fn next_view(&mut self) {
        let next = (self.view.index() + 1) % AppView::all().len();
        self.set_view(AppView::from_index(next));
    }

    /// Switch to the previous view
    pub fn prev_view(&mut self) {
        let current = self.view.index();
        let prev = if current == 0 {
            AppView::all().len() - 1
        } else {
            current - 1
        };
        self.set_view(AppView::from_index(prev));
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.set_status(format!("{} theme", theme.name()));
    }

    /// Palette for the current theme
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.theme.theme())
    }

    /// Set a status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_time = Some(Instant::now());
    }

    /// Get status message if still within the configured display time
    pub fn get_status(&self) -> Option<&str> {
        match (&self.status_message, self.status_time) {
            (Some(msg), Some(time)) if time.elapsed() < self.config.status_duration() => {
                Some(msg)
            }
            _ => None,
        }
    }

    /// Get elapsed time formatted
    pub fn elapsed_formatted(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }

    /// Advance timers that change state on their own
    pub fn tick(&mut self, now: Instant) {
        if self.registration.tick(now) {
            self.set_status("Form reset".to_string());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if self.state != AppState::Running {
            return;
        }
        self.total_events += 1;

        let ctrl =
            is_command_chord(key.modifiers) && key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return self.quit(),
            KeyCode::Char('t') if ctrl => return self.toggle_theme(),
            KeyCode::Esc => return self.quit(),
            KeyCode::F(n @ 1..=7) => return self.set_view(AppView::from_index(n as usize - 1)),
            KeyCode::PageDown => return self.next_view(),
            KeyCode::PageUp => return self.prev_view(),
            _ => {}
        }

        match self.view {
            AppView::Register => return self.register_key(key, now),
            AppView::Typing => {
                self.typing.handle_key(&key, now);
                return;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('?') => self.set_view(AppView::Help),
            code => self.section_key(code, now),
        }
    }

    fn section_key(&mut self, code: KeyCode, now: Instant) {
        match self.view {
            AppView::Home => match code {
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
                    self.counter.press(CounterButton::Increment, now)
                }
                KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => {
                    self.counter.press(CounterButton::Decrement, now)
                }
                KeyCode::Char('0') | KeyCode::Char('r') => {
                    self.counter.press(CounterButton::Reset, now)
                }
                _ => {}
            },
            AppView::Cards => match code {
                KeyCode::Right => self.cards.hover_next(),
                KeyCode::Left => self.cards.hover_prev(),
                _ => {}
            },
            AppView::Faq => match code {
                KeyCode::Down => self.faq.cursor_down(),
                KeyCode::Up => self.faq.cursor_up(),
                KeyCode::Enter | KeyCode::Char(' ') => self.faq.activate_cursor(),
                _ => {}
            },
            AppView::Tabs => match code {
                KeyCode::Right => self.tabs.select_next(now),
                KeyCode::Left => self.tabs.select_prev(now),
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if index < self.tabs.panels().len() {
                        self.tabs.select(index, now);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn register_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Enter {
            return self.activate_form(now);
        }

        let form = &mut self.registration;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(now),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(now),
            KeyCode::Backspace => form.backspace(now),
            KeyCode::Char(' ') if form.focus() == FocusTarget::Field(FieldId::Terms) => {
                form.toggle_terms(now)
            }
            KeyCode::Char(c) if !is_command_chord(key.modifiers) => form.type_char(c, now),
            _ => {}
        }
    }

    /// Press the focused form element and report the result in the status bar
    fn activate_form(&mut self, now: Instant) {
        let form = &mut self.registration;
        let clearing = form.focus() == FocusTarget::Clear && !form.is_confirming(now);
        match form.activate(now) {
            Some(FormOutcome::Accepted) => self.set_status("Registration successful!".to_string()),
            Some(FormOutcome::Rejected { .. }) => {
                let errors = self.registration.board().error_count();
                self.set_status(format!("Please fix {} field(s)", errors));
            }
            None if clearing => self.set_status("Form cleared".to_string()),
            None => {}
        }
    }

    /// A click focuses the element first, then acts like the browser would:
    /// checkboxes toggle and buttons press
    fn click_form(&mut self, target: FocusTarget, now: Instant) {
        self.registration.focus_on(target, now);
        match target {
            FocusTarget::Field(FieldId::Terms) => self.registration.toggle_terms(now),
            FocusTarget::Field(_) => {}
            FocusTarget::Submit | FocusTarget::Clear => self.activate_form(now),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        self.handle_mouse_at(mouse, area, Instant::now());
    }

    pub fn handle_mouse_at(&mut self, mouse: MouseEvent, area: Rect, now: Instant) {
        if self.state != AppState::Running {
            return;
        }
        let target = layout::target_at(self, area, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => self.hover(target),
            MouseEventKind::Down(MouseButton::Left) => {
                self.total_events += 1;
                if let Some(target) = target {
                    self.click(target, now);
                }
            }
            _ => {}
        }
    }

    /// Pointer moved over `target`, or off everything
    pub fn hover(&mut self, target: Option<Target>) {
        self.theme.set_hovered(target == Some(Target::ThemeToggle));
        match self.view {
            AppView::Faq => self.faq.hover(match target {
                Some(Target::FaqQuestion(i)) => Some(i),
                _ => None,
            }),
            AppView::Cards => self.cards.hover(match target {
                Some(Target::Card(i)) => Some(i),
                _ => None,
            }),
            _ => {}
        }
    }

    pub fn click(&mut self, target: Target, now: Instant) {
        match target {
            Target::View(i) => self.set_view(AppView::from_index(i)),
            Target::ThemeToggle => self.toggle_theme(),
            Target::Counter(button) => self.counter.press(button, now),
            Target::FaqQuestion(i) => self.faq.activate(i),
            Target::Tab(i) => self.tabs.select(i, now),
            Target::Card(_) => {}
            Target::Form(target) => self.click_form(target, now),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn view_index_roundtrip() {
        for view in AppView::all() {
            assert_eq!(AppView::from_index(view.index()), *view);
        }
    }

    #[test]
    fn views_wrap() {
        let mut app = App::default();
        app.prev_view();
        assert_eq!(app.view, AppView::Help);
        app.next_view();
        assert_eq!(app.view, AppView::Home);
    }

    #[test]
    fn function_keys_jump_to_views() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.view, AppView::Register);
        press(&mut app, KeyCode::F(6));
        assert_eq!(app.view, AppView::Typing);
        assert!(app.typing.is_focused());
        press(&mut app, KeyCode::F(1));
        assert!(!app.typing.is_focused());
    }

    #[test]
    fn q_types_in_text_views_but_quits_elsewhere() {
        let mut app = App::default();
        app.set_view(AppView::Typing);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.typing.text(), "q");

        app.set_view(AppView::Home);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn ctrl_t_toggles_theme_from_anywhere() {
        let mut app = App::default();
        app.set_view(AppView::Register);
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(app.theme.theme(), Theme::Dark);
        assert_eq!(app.registration.values().full_name, "");
    }

    #[test]
    fn altgr_types_into_form_but_ctrl_alt_is_not_a_shortcut() {
        let mut app = App::default();
        app.set_view(AppView::Register);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), altgr));
        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.registration.values().full_name, "@c");

        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.registration.values().full_name, "@c");
    }

    #[test]
    fn status_expires_after_configured_duration() {
        let mut app = App::default();
        app.set_status("hello".to_string());
        assert_eq!(app.get_status(), Some("hello"));
        app.status_time = Some(Instant::now() - app.config.status_duration());
        assert_eq!(app.get_status(), None);
    }

    #[test]
    fn hover_only_applies_to_current_view() {
        let mut app = App::default();
        app.hover(Some(Target::ThemeToggle));
        assert!(app.theme.is_hovered());
        app.hover(None);
        assert!(!app.theme.is_hovered());

        app.set_view(AppView::Cards);
        app.hover(Some(Target::Card(2)));
        assert!(app.cards.is_revealed(2));
    }
}
