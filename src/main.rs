//! Interactive Page - terminal rendition of an interactive web page

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{fs::File, io::stdout, time::Instant};

use interactive_page::{
    config::Config,
    ui::{self, App, AppState},
};

/// Logs go to a file because the terminal belongs to the UI
fn init_logging(config: &Config) -> Result<()> {
    let path = config.logging.file_path();
    let file = File::create(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .init();

    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn main() -> Result<()> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(&config)?;
    if let Some(e) = load_error {
        warn!("Using default config: {}", e);
    }

    ctrlc::set_handler(|| {
        restore_terminal();
        std::process::exit(130);
    })
    .context("Failed to install Ctrl+C handler")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = config.refresh_interval();
    let mut app = App::new(config);
    info!("Interactive page started");

    // Main loop
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if app.state == AppState::Quitting {
            break;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(
        "Session ended after {} with {} events",
        app.elapsed_formatted(),
        app.total_events
    );
    println!("\nInteractive Page session complete.");
    println!("Total events processed: {}", app.total_events);
    println!("Registrations accepted: {}", app.registration.submissions());
    println!("Session duration: {}", app.elapsed_formatted());

    Ok(())
}
