//! Application state for the callview TUI.
//!
//! `App` owns the conversation entries exclusively. A fetch replaces them
//! wholesale; a failed fetch leaves the prior (empty) state in place and
//! records the error for the status panel.

use callview_client::{FetchError, LogEntry};

use crate::event::Action;
use crate::theme::Theme;

/// Lines scrolled per PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// State of the one-shot conversation log fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Fetch is in flight.
    Loading,
    /// Fetch completed and the entries were replaced.
    Loaded,
    /// Fetch failed; the prior entries were kept.
    Failed(String),
}

/// Top-level application state.
pub struct App {
    /// Conversation entries, in arrival order from the API.
    pub entries: Vec<LogEntry>,
    /// Status of the most recent fetch.
    pub fetch_status: FetchStatus,
    /// Endpoint URL shown in the status panel.
    pub endpoint: String,
    /// Scroll offset into the rendered conversation lines.
    pub scroll: usize,
    /// Whether the view follows the tail of the log.
    pub follow: bool,
    /// Whether a fetch task is currently in flight.
    pub fetch_in_progress: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    /// Color palette.
    pub theme: Theme,
}

impl App {
    /// Create the app in its initial (loading) state.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            fetch_status: FetchStatus::Loading,
            endpoint: endpoint.into(),
            scroll: 0,
            follow: true,
            fetch_in_progress: true,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Mark a new fetch as started.
    pub fn begin_fetch(&mut self) {
        self.fetch_status = FetchStatus::Loading;
        self.fetch_in_progress = true;
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the entries wholesale and snaps the view back to the
    /// tail. Failure is logged and shown in the status panel; the entries are
    /// left untouched so the empty-state placeholder stays up.
    pub fn apply_fetch(&mut self, result: Result<Vec<LogEntry>, FetchError>) {
        self.fetch_in_progress = false;
        match result {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "conversation log loaded");
                self.entries = entries;
                self.fetch_status = FetchStatus::Loaded;
                self.follow = true;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch conversation log");
                self.fetch_status = FetchStatus::Failed(e.to_string());
            }
        }
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Up => {
                self.follow = false;
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::Down => self.scroll += 1,
            Action::PageUp => {
                self.follow = false;
                self.scroll = self.scroll.saturating_sub(PAGE_SCROLL);
            }
            Action::PageDown => self.scroll += PAGE_SCROLL,
            Action::Top => {
                self.follow = false;
                self.scroll = 0;
            }
            Action::Bottom => self.follow = true,
            // Refresh is handled by the event loop (it owns the task handle)
            Action::Refresh | Action::None => {}
        }
    }

    /// Clamp the scroll offset against the rendered content size.
    ///
    /// Called during drawing once the conversation viewport is known. While
    /// following, the offset snaps to the bottom; scrolling past the bottom
    /// re-enables follow mode.
    pub fn clamp_scroll(&mut self, total_lines: usize, viewport: usize) {
        let max = total_lines.saturating_sub(viewport);
        if self.scroll >= max {
            self.scroll = max;
            self.follow = true;
        }
        if self.follow {
            self.scroll = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callview_client::Role;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry::new(Role::User, format!("message {i}")))
            .collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let app = App::new("http://127.0.0.1:5000/conversation-log");
        assert!(app.entries.is_empty());
        assert_eq!(app.fetch_status, FetchStatus::Loading);
        assert!(app.fetch_in_progress);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_apply_fetch_replaces_entries_wholesale() {
        let mut app = App::new("http://localhost");
        app.entries = entries(2);

        app.apply_fetch(Ok(entries(5)));
        assert_eq!(app.entries.len(), 5);
        assert_eq!(app.fetch_status, FetchStatus::Loaded);
        assert!(app.follow);
        assert!(!app.fetch_in_progress);
    }

    #[test]
    fn test_apply_fetch_failure_keeps_prior_state() {
        let mut app = App::new("http://localhost");

        app.apply_fetch(Err(FetchError::Status(500)));
        assert!(app.entries.is_empty());
        assert!(matches!(app.fetch_status, FetchStatus::Failed(ref m) if m.contains("500")));
        assert!(!app.fetch_in_progress);
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::new("http://localhost");
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_up_leaves_follow_mode() {
        let mut app = App::new("http://localhost");
        app.scroll = 5;
        assert!(app.follow);

        app.handle_action(Action::Up);
        assert!(!app.follow);
        assert_eq!(app.scroll, 4);

        app.handle_action(Action::Bottom);
        assert!(app.follow);
    }

    #[test]
    fn test_scroll_up_saturates_at_top() {
        let mut app = App::new("http://localhost");
        app.handle_action(Action::Top);
        app.handle_action(Action::Up);
        app.handle_action(Action::PageUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_clamp_scroll_follows_tail() {
        let mut app = App::new("http://localhost");
        app.clamp_scroll(50, 20);
        assert_eq!(app.scroll, 30);

        // Scrolling past the bottom clamps and re-enables follow
        app.follow = false;
        app.scroll = 100;
        app.clamp_scroll(50, 20);
        assert_eq!(app.scroll, 30);
        assert!(app.follow);

        // A position above the bottom is left alone
        app.follow = false;
        app.scroll = 10;
        app.clamp_scroll(50, 20);
        assert_eq!(app.scroll, 10);
        assert!(!app.follow);
    }

    #[test]
    fn test_clamp_scroll_short_content() {
        let mut app = App::new("http://localhost");
        app.follow = false;
        app.scroll = 3;
        app.clamp_scroll(5, 20);
        assert_eq!(app.scroll, 0);
    }
}
