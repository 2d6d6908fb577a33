//! leadform-tui - Terminal lead-capture kiosk
//!
//! A Ratatui front end for the ProFit Coach contact flow: a home screen
//! with animated stats and a contact form that validates input and submits
//! leads to an HTTP endpoint.

mod analytics;
mod app;
mod config;
mod notify;
mod state;
mod submit;
mod transport;
mod ui;

use anyhow::Result;
use app::App;
use config::KioskConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadform_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = KioskConfig::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config, using defaults: {err}");
        KioskConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Outermost diagnostics net: log and exit nonzero, no recovery
    if let Err(err) = result {
        tracing::error!("unhandled error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Expire the notification window before drawing
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while counters animate or a submission is in
        // flight (16ms = ~60fps), normal polling (100ms) otherwise
        let poll_duration = if app.state.is_animating() || app.controller.is_submitting() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
