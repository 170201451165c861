// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::notify::{NotificationSink, emit};
use crate::system::{ChannelSink, spawn_notifier};
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode, the alternate screen and mouse capture, writing the
/// escape sequences to `out`.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Chains a hook that restores the terminal before the previous hook reports
/// the panic.
pub fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        previous(info);
    }));
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = restore_terminal(&mut stdout);
        return Err(e.into());
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal(&mut io::stdout());
            Err(e.into())
        }
    }
}

pub async fn run(cfg: Config) -> Result<()> {
    // --- 1. TERMINAL SETUP ---
    let mut terminal = setup_terminal()?;
    install_restore_hook();

    // --- 2. STATE INIT ---
    let mut app_state = AppState::with_config(&cfg);
    let notifier = ChannelSink::new(spawn_notifier(cfg.desktop_notifications));
    log::info!(
        "TUI started (desktop notifications: {})",
        cfg.desktop_notifications
    );

    // --- 3. UI LOOP ---
    let result = event_loop(&mut terminal, &mut app_state, notifier);

    // --- 4. CLEANUP ---
    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;
    log::info!("TUI stopped");
    result
}

fn event_loop(
    terminal: &mut Term,
    app_state: &mut AppState,
    mut notifier: impl NotificationSink,
) -> Result<()> {
    loop {
        app_state.toasts.prune(Instant::now());
        terminal.draw(|f| draw(f, app_state))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            Event::Mouse(mouse) => {
                if let Some(kind) = app_state.focus.kind() {
                    match mouse.kind {
                        MouseEventKind::ScrollDown => app_state.next(kind),
                        MouseEventKind::ScrollUp => app_state.previous(kind),
                        _ => {}
                    }
                }
            }
            Event::Key(key) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if let Some(action) = handlers::handle_key_event(key, app_state) {
                    if action == Action::Quit {
                        break;
                    }
                    emit(&mut notifier, app_state.dispatch(action));
                }
            }
            _ => {}
        }
    }
    Ok(())
}
