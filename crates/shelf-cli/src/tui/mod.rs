//! Shelf TUI
//!
//! Terminal page for the catalog: a search box, the result cards and a
//! detail pane for the record named by the fragment.
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - Enter: Open the selected book
//! - b or Esc: Back to results
//! - PgUp/PgDn: Scroll the detail pane
//! - q: Quit
//!
//! ## Commands
//!
//! - /: Search (results update as you type)
//! - y: Copy the selected book's ISBN
//! - o: Open the detail page's external link
//! - c: Clear search and detail
//! - a: Add a book
//! - g: Go to a fragment (e.g. #book-b2)

mod app;
mod surface;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use shelf_core::{ClipboardError, Config, CopyRequest};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use app::{App, InputMode};

use crate::clipboard;

type CopyResult = (CopyRequest, Result<(), ClipboardError>);

/// Run the TUI application
pub async fn run(config: Config) -> Result<()> {
    // Initialize TUI logging (file-based, only if SHELF_LOG is set)
    init_tui_logging(&config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let (copy_tx, mut copy_rx) = mpsc::channel::<CopyResult>(8);

    loop {
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            biased;

            // Finished clipboard writes
            Some((request, result)) = copy_rx.recv() => {
                app.library.complete_copy(&request, result, Instant::now());
            }

            // Poll for terminal events
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                if event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        // Only handle key press events (not release)
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }

                        // If an alert is showing, any key dismisses it
                        if app.surface().has_alert() {
                            app.surface_mut().dismiss_alert();
                            continue;
                        }

                        // If help is showing, any key dismisses it
                        if app.show_help {
                            app.show_help = false;
                            continue;
                        }

                        match app.input_mode {
                            InputMode::Normal => {
                                if let Some(request) = handle_normal_mode(app, key.code, key.modifiers) {
                                    spawn_copy(request, copy_tx.clone());
                                }
                            }
                            InputMode::Search => handle_search_mode(app, key.code),
                            InputMode::Form => handle_form_mode(app, key.code),
                            InputMode::Goto => handle_goto_mode(app, key.code),
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Write to the clipboard off the UI loop and report back on `tx`
fn spawn_copy(request: CopyRequest, tx: mpsc::Sender<CopyResult>) {
    debug!(id = %request.id, "copying isbn");
    tokio::spawn(async move {
        let result = clipboard::write_text(&request.isbn).await;
        let _ = tx.send((request, result)).await;
    });
}

/// Handle key events in normal mode
///
/// Returns the clipboard write to start when the key was the copy action.
fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Option<CopyRequest> {
    match code {
        KeyCode::Char('j') | KeyCode::Char('k') | KeyCode::Up | KeyCode::Down => {
            app.status_message = None;
        }
        _ => {}
    }

    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Home => app.move_to_first(),
        KeyCode::End | KeyCode::Char('G') => app.move_to_last(),
        KeyCode::PageUp => app.scroll_detail_up(),
        KeyCode::PageDown => app.scroll_detail_down(),

        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('b') | KeyCode::Esc => app.back(),
        KeyCode::Char('y') => return app.copy_selected(),
        KeyCode::Char('o') => app.open_external(),
        KeyCode::Char('c') => app.clear(),

        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('a') => app.enter_form_mode(),
        KeyCode::Char('g') => app.enter_goto_mode(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }

    None
}

/// Handle key events in search mode
fn handle_search_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => app.exit_input_mode(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Handle key events in the add-book form
fn handle_form_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.exit_input_mode(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Handle key events in goto mode
fn handle_goto_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.goto_input.clear();
            app.exit_input_mode();
        }
        KeyCode::Enter => app.submit_goto(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Initialize file-based logging for TUI mode
///
/// Only enabled when SHELF_LOG is set. The terminal belongs to the UI, so
/// logs go to `log_file` or the default debug log.
fn init_tui_logging(config: &Config) {
    let Ok(log_level) = std::env::var("SHELF_LOG") else {
        return;
    };

    let log_path = config.log_path();

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("shelf_core={},shelf_cli={}", log_level, log_level));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}
