//! Chat UI rendering components

use super::state::ChatState;
use crate::application::controller::ChatController;
use crate::application::input::InputField;
use crate::domain::{LogEntry, Message, Sender};
use crate::infrastructure::backend::ChatBackend;
use crate::render::{Segment, render_message};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render<B: ChatBackend>(
        frame: &mut Frame,
        controller: &ChatController<B>,
        state: &mut ChatState,
        endpoint: &str,
    ) {
        let area = frame.area();

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(5),    // Messages area
                Constraint::Length(3), // Input area
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let awaiting = controller.is_awaiting_reply();
        Self::render_status_bar(frame, chunks[0], state, endpoint, awaiting);
        Self::render_messages(frame, chunks[1], controller.log().entries(), state);
        Self::render_input(frame, chunks[2], controller.input(), awaiting);
        Self::render_help_bar(frame, chunks[3]);
    }

    /// Lines for one log entry, followed by a blank separator line
    pub fn entry_lines(entry: &LogEntry, spinner: &str) -> Vec<Line<'static>> {
        match entry {
            LogEntry::Message(message) => Self::message_lines(message),
            LogEntry::Typing(_) => vec![
                Line::from(vec![
                    Span::styled("Bot: ", theme::bot_prefix()),
                    Span::styled(format!("{spinner} typing..."), theme::loading()),
                ]),
                Line::from(""),
            ],
        }
    }

    fn message_lines(message: &Message) -> Vec<Line<'static>> {
        let rendered = render_message(message);

        let mut prefix = vec![Span::styled(
            format!("[{}] ", message.time),
            theme::timestamp(),
        )];
        match (message.sender, message.urgent) {
            (Sender::User, _) => prefix.push(Span::styled("You: ", theme::user_prefix())),
            (Sender::Bot, false) => prefix.push(Span::styled("Bot: ", theme::bot_prefix())),
            (Sender::Bot, true) => {
                prefix.push(Span::styled(" ! ", theme::urgent_badge()));
                prefix.push(Span::styled(" Bot: ", theme::urgent_text()));
            }
        }
        let indent = " ".repeat(
            prefix
                .iter()
                .map(|span| span.content.chars().count())
                .sum::<usize>(),
        );
        let body_style = if message.urgent {
            theme::urgent_text()
        } else {
            theme::text()
        };

        let mut lines = Vec::with_capacity(rendered.lines.len() + 1);
        for (index, line) in rendered.lines.iter().enumerate() {
            let mut spans = if index == 0 {
                prefix.clone()
            } else {
                vec![Span::raw(indent.clone())]
            };
            for segment in &line.segments {
                match segment {
                    Segment::Text(text) => spans.push(Span::styled(text.clone(), body_style)),
                    Segment::Link { label, url } => {
                        spans.push(Span::styled(label.clone(), theme::link()));
                        spans.push(Span::styled(format!(" ({url})"), theme::link_target()));
                    }
                }
            }
            lines.push(Line::from(spans));
        }

        // Empty line between messages
        lines.push(Line::from(""));
        lines
    }

    /// Render status bar with endpoint and reply state
    fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        state: &ChatState,
        endpoint: &str,
        awaiting: bool,
    ) {
        let mut spans = vec![
            Span::styled(" 💬 ", theme::border_active()),
            Span::styled("Lifeline Chat ", theme::text()),
            Span::styled("│ ", theme::border()),
            Span::styled(endpoint.to_string(), theme::footer()),
        ];
        if awaiting {
            spans.push(Span::styled(
                format!("  {} waiting for reply", state.spinner()),
                theme::loading(),
            ));
        }
        if let Some(status) = &state.status_message {
            spans.push(Span::styled(format!(" │ {status} "), theme::footer()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        let para = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(para, area);
    }

    /// Render messages area
    fn render_messages(
        frame: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        state: &mut ChatState,
    ) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = entries
            .iter()
            .flat_map(|entry| Self::entry_lines(entry, state.spinner()))
            .collect();
        let para = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Scroll is measured in wrapped rows, not logical lines
        let rows = para.line_count(inner.width);
        state.max_scroll = Self::max_scroll(rows, inner.height as usize);
        let scroll = state.effective_scroll();

        frame.render_widget(para.scroll((scroll, 0)), inner);
    }

    /// Largest useful scroll offset for `total_rows` in a view of `height`
    pub fn max_scroll(total_rows: usize, height: usize) -> u16 {
        total_rows
            .saturating_sub(height)
            .min(u16::MAX as usize - 1) as u16
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, input: &InputField, awaiting: bool) {
        let display_input = if input.is_empty() {
            "Type your message...".to_string()
        } else {
            // Insert cursor indicator
            let mut chars: Vec<char> = input.text().chars().collect();
            if input.cursor() >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(input.cursor(), '|');
            }
            chars.into_iter().collect()
        };
        let input_style = if input.is_empty() {
            theme::footer()
        } else {
            theme::text()
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if awaiting {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if awaiting {
                " Waiting for reply "
            } else {
                " Message "
            });

        let para = Paragraph::new(input_line).block(block);
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": Send │ "),
            Span::styled("↑/↓ PgUp/PgDn", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("Ctrl+U/D", theme::key_hint()),
            Span::raw(": Top/Bottom │ "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(": Clear │ "),
            Span::styled("Esc/Ctrl+Q", theme::key_destructive()),
            Span::raw(": Exit "),
        ]);

        let para = Paragraph::new(help_text).style(theme::footer());
        frame.render_widget(para, area);
    }
}
