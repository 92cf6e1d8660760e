//! Terminal User Interface components

mod app;
mod form_view;
pub mod layout;
mod sections;
pub mod theme;
mod widgets;

pub use app::{App, AppState, AppView};
pub use form_view::{RegistrationPanel, StrengthMeter};
pub use layout::{PageLayout, Target};
pub use sections::{CardsPanel, FaqPanel, HomePanel, TabsPanel, TypingPanel};
pub use theme::ThemeColors;
pub use widgets::*;

use ratatui::{style::Style, widgets::Block, Frame};
use std::time::Instant;

/// Draw the whole page for the current frame
pub fn draw(frame: &mut Frame, app: &App) {
    draw_at(frame, app, Instant::now());
}

/// Draw the page as it looks at `now`
pub fn draw_at(frame: &mut Frame, app: &App, now: Instant) {
    let colors = app.colors();
    let page = PageLayout::new(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        frame.area(),
    );

    let tab_names: Vec<&str> = AppView::all().iter().map(|v| v.name()).collect();
    frame.render_widget(TabBar::new(&tab_names, app.view.index(), colors), page.tab_bar);
    frame.render_widget(
        ThemeButton::new(app.theme.label(), app.theme.is_hovered(), colors),
        page.theme_button,
    );

    match app.view {
        AppView::Home => frame.render_widget(HomePanel::new(&app.counter, now, colors), page.main),
        AppView::Cards => frame.render_widget(CardsPanel::new(&app.cards, colors), page.main),
        AppView::Faq => frame.render_widget(FaqPanel::new(&app.faq, colors), page.main),
        AppView::Tabs => frame.render_widget(TabsPanel::new(&app.tabs, now, colors), page.main),
        AppView::Register => frame.render_widget(
            RegistrationPanel::new(&app.registration, now, colors),
            page.main,
        ),
        AppView::Typing => {
            frame.render_widget(TypingPanel::new(&app.typing, now, colors), page.main)
        }
        AppView::Help => frame.render_widget(HelpPanel::new(colors), page.main),
    }

    let elapsed = app.elapsed_formatted();
    let status = StatusBar::new(app.view.name(), &elapsed, app.total_events, colors)
        .message(app.get_status());
    frame.render_widget(status, page.status);
}
