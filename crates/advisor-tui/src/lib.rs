//! advisor-tui: Terminal front end for the advisor chat widget
//!
//! This crate provides the TUI layer for advisor, including:
//! - Launcher screen with the chat button
//! - Chat modal with the validated message form and transcript
//! - Toast notifications for send outcomes

mod app;
mod event;
mod form;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod toast;
mod ui;

pub use app::{App, ChatWidget};
pub use event::{Action, Event, EventHandler};
pub use advisor_engine;

use advisor_engine::{Config, Message, PendingSubmission, ServiceError};
use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::task::JoinHandle;

/// A submission on the wire: what was sent and the task sending it.
type InFlight = (PendingSubmission, JoinHandle<Result<Message, ServiceError>>);

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// on exit.
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.build_service(), config.toast_ticks);
    tracing::info!(endpoint = %config.endpoint, service = ?config.service, "starting tui");

    // 4 Hz tick rate = 250ms
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut in_flight: Option<InFlight> = None;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })?;

        // Dispatch an accepted submission
        if let Some(pending) = app.take_outbox() {
            let service = app.widget.service();
            let context = pending.context().to_vec();
            let handle = tokio::spawn(async move { service.converse(&context).await });
            in_flight = Some((pending, handle));
        }

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_key(key),
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        // Check for a completed request (non-blocking)
        if in_flight
            .as_ref()
            .is_some_and(|(_, handle)| handle.is_finished())
        {
            if let Some((pending, handle)) = in_flight.take() {
                let result = handle
                    .await
                    .unwrap_or_else(|e| Err(ServiceError::Interrupted(e.to_string())));
                if let Err(e) = app.finish_submission(pending, result) {
                    tracing::warn!(error = %e, "submission result dropped");
                }
            }
        }

        if app.should_quit {
            if let Some((_, handle)) = in_flight.take() {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
