//! Status panel widget.
//!
//! Format: `● status │ caller │ endpoint`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::FetchStatus;
use crate::theme::Theme;

/// Status panel widget for the top of the TUI.
pub struct StatusPanel<'a> {
    status: &'a FetchStatus,
    entry_count: usize,
    caller: Option<&'a str>,
    endpoint: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusPanel<'a> {
    /// Create a new status panel.
    pub fn new(status: &'a FetchStatus, entry_count: usize, theme: &'a Theme) -> Self {
        Self {
            status,
            entry_count,
            caller: None,
            endpoint: "",
            theme,
        }
    }

    /// Set the current caller number.
    #[must_use]
    pub fn caller(mut self, caller: Option<&'a str>) -> Self {
        self.caller = caller;
        self
    }

    /// Set the endpoint URL shown at the end of the bar.
    #[must_use]
    pub fn endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    fn status_span(&self) -> Span<'_> {
        match self.status {
            FetchStatus::Loading => {
                Span::styled("Loading...", Style::default().fg(self.theme.warning))
            }
            FetchStatus::Loaded => Span::styled(
                format!(
                    "{} {}",
                    self.entry_count,
                    if self.entry_count == 1 { "entry" } else { "entries" }
                ),
                Style::default().fg(self.theme.success),
            ),
            FetchStatus::Failed(message) => Span::styled(
                format!("Fetch failed: {message}"),
                Style::default().fg(self.theme.error),
            ),
        }
    }
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            self.status_span(),
        ];

        if let Some(caller) = self.caller {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                format!("caller {caller}"),
                Style::default().fg(self.theme.subtext),
            ));
        }

        if !self.endpoint.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                self.endpoint,
                Style::default().fg(self.theme.muted),
            ));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal_sized};

    fn render(panel: StatusPanel<'_>) -> String {
        let mut terminal = create_test_terminal_sized(80, 1);
        terminal
            .draw(|frame| frame.render_widget(panel, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_status() {
        let theme = Theme::default();
        let content = render(StatusPanel::new(&FetchStatus::Loading, 0, &theme));
        assert!(content.contains("Loading..."));
    }

    #[test]
    fn test_loaded_status_shows_count() {
        let theme = Theme::default();
        let content = render(StatusPanel::new(&FetchStatus::Loaded, 12, &theme));
        assert!(content.contains("12 entries"));

        let content = render(StatusPanel::new(&FetchStatus::Loaded, 1, &theme));
        assert!(content.contains("1 entry"));
    }

    #[test]
    fn test_failed_status_shows_message() {
        let theme = Theme::default();
        let status = FetchStatus::Failed("backend returned HTTP 500".into());
        let content = render(StatusPanel::new(&status, 0, &theme));
        assert!(content.contains("Fetch failed: backend returned HTTP 500"));
    }

    #[test]
    fn test_caller_and_endpoint_segments() {
        let theme = Theme::default();
        let panel = StatusPanel::new(&FetchStatus::Loaded, 3, &theme)
            .caller(Some("+15551234567"))
            .endpoint("http://127.0.0.1:5000/conversation-log");
        let content = render(panel);
        assert!(content.contains("caller +15551234567"));
        assert!(content.contains("│"));
        assert!(content.contains("http://127.0.0.1:5000/conversation-log"));
    }
}
