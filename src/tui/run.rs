//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! There is no background work: every state change happens in response to
//! a key event, so the loop blocks directly on `event::read()` and each
//! event runs to completion (and is re-rendered) before the next is read.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::roll::{FaceSource, RngFaces};

use super::state::{Action, App, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action — this is where
/// invalid counter input dies, before it can reach the tally.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char('d') => Some(Action::Done),
        KeyCode::Esc => Some(Action::Back),

        // Counter editing
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Increment)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Decrement),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Erase),
        KeyCode::Char('c') => Some(Action::Clear),
        KeyCode::Char(ch @ '0'..='9') => Some(Action::Digit(ch as u8 - b'0')),

        // Rolling
        KeyCode::Char('r') | KeyCode::Char(' ') => Some(Action::Roll),
        KeyCode::Char('a') => Some(Action::RollAll),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// creates a fresh session, and processes key events one at a time.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();
    let mut faces = RngFaces::thread_local();

    let result = event_loop(&mut terminal, &mut app, &mut faces);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    faces: &mut dyn FaceSource,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| render(app, frame))?;

        // Check quit flag
        if app.should_quit {
            return Ok(());
        }

        // Block on the next event
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    let screen = std::mem::take(&mut app.screen);
                    match update(screen, &action, &mut app.tally, faces) {
                        Transition::Screen(next) => app.screen = next,
                        Transition::Quit => app.should_quit = true,
                    }
                }
            }
            _ => {} // ignore mouse, resize, etc.
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
