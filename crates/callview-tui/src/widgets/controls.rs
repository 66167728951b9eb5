//! Controls bar widget: footer key hints.
//!
//! Pure rendering of passed-in hints; no internal logic.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Default hints for the viewer.
pub const DEFAULT_HINTS: &[(&str, &str)] = &[
    ("r", "Refresh"),
    ("↑/↓", "Scroll"),
    ("q", "Quit"),
];

/// Footer bar listing available keys.
pub struct ControlsBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> ControlsBar<'a> {
    /// Create a controls bar with the default hints.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            hints: DEFAULT_HINTS,
            theme,
        }
    }

    /// Override the hints.
    #[must_use]
    pub fn hints(mut self, hints: &'a [(&'a str, &'a str)]) -> Self {
        self.hints = hints;
        self
    }
}

impl Widget for ControlsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(self.theme.primary),
            ));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(self.theme.muted),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal_sized};

    #[test]
    fn test_default_hints_render() {
        let theme = Theme::default();
        let mut terminal = create_test_terminal_sized(60, 1);
        terminal
            .draw(|frame| frame.render_widget(ControlsBar::new(&theme), frame.area()))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[r] Refresh"));
        assert!(content.contains("Scroll"));
        assert!(content.contains("[q] Quit"));
    }

    #[test]
    fn test_custom_hints() {
        let theme = Theme::default();
        let hints = [("x", "Export")];
        let mut terminal = create_test_terminal_sized(30, 1);
        terminal
            .draw(|frame| {
                frame.render_widget(ControlsBar::new(&theme).hints(&hints), frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[x] Export"));
        assert!(!content.contains("Refresh"));
    }
}
