//! vibegrove-tui: Terminal frontend for the VibeGrove screens.
//! Uses Ratatui + Crossterm for rendering; mouse drags stand in for touch.

mod app;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{error, info};

use vibegrove_core::app::GroveApp;
use vibegrove_core::config::Config;
use vibegrove_core::timers::{self, TimerReceiver};

use app::App;
use ui::hits::HitMap;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to a file (not stdout, since we own the terminal)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("vibegrove-tui.log")
        .context("Failed to open vibegrove-tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_from_dir(&project_root)?;

    let (timer_tx, mut timer_rx) = timers::channel();
    let mut app = App::new(GroveApp::new(config, timer_tx));

    info!("Starting TUI on {}", app.core.current());

    // Setup terminal
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut timer_rx);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("TUI exited with error: {:#}", e);
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    timer_rx: &mut TimerReceiver,
) -> Result<()> {
    let mut hits = HitMap::default();

    // Main event loop
    loop {
        // Draw
        terminal.draw(|frame| hits = ui::draw(frame, app))?;

        // Timer tokens (non-blocking)
        while let Ok(fired) = timer_rx.try_recv() {
            app.core.handle_timer(fired);
        }
        app.log_events();

        // Handle terminal events
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.code, key.modifiers) {
                        // Quit
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        _ => app.on_key(key),
                    }
                }
                Event::Mouse(mouse) => app.on_mouse(mouse, &hits),
                Event::FocusGained => app.on_focus(true),
                Event::FocusLost => app.on_focus(false),
                _ => {}
            }
            app.log_events();
        }

        if app.should_quit {
            break;
        }
    }

    info!("Quit from {}", app.core.current());
    Ok(())
}
