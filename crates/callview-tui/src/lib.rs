//! callview-tui: Terminal UI for the call assistant conversation log
//!
//! This crate provides the viewer shell:
//! - App state (entries, fetch status, scrolling)
//! - The event loop with the single startup fetch
//! - Presentational widgets (conversation list, status panel, controls bar)

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
mod theme;
pub mod widgets;

pub use app::{App, FetchStatus};
pub use callview_client;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use theme::Theme;

use callview_client::{fetch_log, latest_caller, Config, FetchError, LogEntry};
use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use std::io::{self, stdout};
use tokio::task::JoinHandle;

use widgets::{ControlsBar, ConversationView, StatusPanel};

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
/// Sets up the terminal, issues the startup fetch, runs the event loop, and
/// restores the terminal on exit.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.log_url());

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, &config).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // The single suspension point: the startup fetch, polled for completion
    let mut fetch_handle: Option<JoinHandle<Result<Vec<LogEntry>, FetchError>>> =
        Some(spawn_fetch(config));

    loop {
        terminal.draw(|frame| draw(app, frame))?;

        // Check for a completed fetch (non-blocking)
        if fetch_handle.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = fetch_handle.take() {
                match handle.await {
                    Ok(result) => app.apply_fetch(result),
                    Err(e) => {
                        tracing::error!(error = %e, "fetch task failed");
                        app.fetch_in_progress = false;
                        app.fetch_status = FetchStatus::Failed("fetch task failed".into());
                    }
                }
            }
        }

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => match key_to_action(key) {
                    Action::Refresh => {
                        // Only one fetch in flight at a time
                        if fetch_handle.is_none() {
                            app.begin_fetch();
                            fetch_handle = Some(spawn_fetch(config));
                        }
                    }
                    action => app.handle_action(action),
                },
                Event::Tick | Event::Resize(_, _) => {}
            }
        }

        if app.should_quit {
            if let Some(handle) = fetch_handle.take() {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

fn spawn_fetch(config: &Config) -> JoinHandle<Result<Vec<LogEntry>, FetchError>> {
    let config = config.clone();
    tokio::spawn(async move { fetch_log(&config).await })
}

/// Render one frame: status panel, conversation pane, controls bar.
fn draw(app: &mut App, frame: &mut Frame<'_>) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    // Clamp scrolling against the conversation pane's inner size (border
    // takes one cell on each side)
    let conversation_area = chunks[1];
    let inner_width = conversation_area.width.saturating_sub(2);
    let inner_height = conversation_area.height.saturating_sub(2);
    let total_lines = widgets::line_count(&app.entries, inner_width);
    app.clamp_scroll(total_lines, inner_height as usize);

    let status = StatusPanel::new(&app.fetch_status, app.entries.len(), &app.theme)
        .caller(latest_caller(&app.entries))
        .endpoint(&app.endpoint);
    frame.render_widget(status, chunks[0]);

    let conversation = ConversationView::new(&app.entries, &app.theme).scroll(app.scroll);
    frame.render_widget(conversation, conversation_area);

    frame.render_widget(ControlsBar::new(&app.theme), chunks[2]);
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
