//! Conversation list widget.
//!
//! Renders the fetched log as an ordered list of `time  role: content`
//! lines, wrapping long content with a hanging indent. An empty log renders
//! the placeholder instead.
//!
//! ```text
//! ┌─ Conversation ──────────────────────────┐
//! │ 12:01  user: What are your hours?       │
//! │ 12:01  assistant: We're open from nine  │
//! │        to five, Monday through Friday.  │
//! │                                         │
//! └─────────────────────────────────────────┘
//! ```

use callview_client::LogEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};

use crate::theme::Theme;

/// Placeholder shown when the log is empty (or the fetch failed).
pub const EMPTY_PLACEHOLDER: &str = "No conversation data available.";

/// Build the display lines for a list of entries at the given width.
///
/// Content wraps to the width remaining after the `time  role: ` prefix,
/// with continuation lines indented under the first content column.
pub fn conversation_lines(entries: &[LogEntry], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in entries {
        let time = entry.time_str();
        let time_part = if time.is_empty() {
            String::new()
        } else {
            format!("{time}  ")
        };
        let label = format!("{}: ", entry.role.label());
        let indent = time_part.chars().count() + label.chars().count();

        let content_width = (width as usize).saturating_sub(indent).max(1);
        let wrapped = textwrap::wrap(&entry.content, content_width);

        let role_style = Style::default()
            .fg(theme.role_color(&entry.role))
            .add_modifier(Modifier::BOLD);

        if wrapped.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(time_part.clone(), Style::default().fg(theme.muted)),
                Span::styled(label.clone(), role_style),
            ]));
            continue;
        }

        for (i, piece) in wrapped.iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(time_part.clone(), Style::default().fg(theme.muted)),
                    Span::styled(label.clone(), role_style),
                    Span::styled(piece.to_string(), Style::default().fg(theme.text)),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    Span::styled(piece.to_string(), Style::default().fg(theme.text)),
                ]));
            }
        }
    }

    lines
}

/// Number of display lines the entries occupy at the given width.
pub fn line_count(entries: &[LogEntry], width: u16) -> usize {
    conversation_lines(entries, &Theme::default(), width).len()
}

/// Conversation pane widget.
pub struct ConversationView<'a> {
    entries: &'a [LogEntry],
    theme: &'a Theme,
    scroll: usize,
}

impl<'a> ConversationView<'a> {
    /// Create a new conversation view.
    pub fn new(entries: &'a [LogEntry], theme: &'a Theme) -> Self {
        Self {
            entries,
            theme,
            scroll: 0,
        }
    }

    /// Set the scroll offset (in display lines).
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for ConversationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Conversation ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        if self.entries.is_empty() {
            // Placeholder roughly vertically centered
            let y = inner.y + inner.height / 2;
            let placeholder_area = Rect::new(inner.x, y, inner.width, 1);
            Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().fg(self.theme.muted))
                .alignment(ratatui::layout::Alignment::Center)
                .render(placeholder_area, buf);
            return;
        }

        let lines = conversation_lines(self.entries, self.theme, inner.width);
        let total = lines.len();
        let viewport = inner.height as usize;
        let offset = self.scroll.min(total.saturating_sub(viewport));

        #[allow(clippy::cast_possible_truncation)]
        let paragraph = Paragraph::new(Text::from(lines)).scroll((offset as u16, 0));
        paragraph.render(inner, buf);

        // Scrollbar in the right margin when content exceeds the viewport
        if total > viewport {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(total).position(offset);
            let scrollbar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };
            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
