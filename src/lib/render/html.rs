//! HTML fragments for rendered messages

use super::markup::{RenderedMessage, Segment};
use crate::domain::Sender;

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a message as a self-contained `<div>`.
///
/// Links open in a new browsing context; lines are separated by `<br>`.
pub fn to_html(message: &RenderedMessage) -> String {
    let mut classes = String::from("message");
    match message.sender {
        Sender::User => classes.push_str(" user-message"),
        Sender::Bot => classes.push_str(" bot-message"),
    }
    if message.urgent {
        classes.push_str(" urgent-message");
    }

    let body = message
        .lines
        .iter()
        .map(|line| {
            line.segments
                .iter()
                .map(segment_html)
                .collect::<Vec<_>>()
                .concat()
        })
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        "<div class=\"{}\">{}<div class=\"message-time\">{}</div></div>",
        classes,
        body,
        escape_html(&message.time)
    )
}

fn segment_html(segment: &Segment) -> String {
    match segment {
        Segment::Text(text) => escape_html(text),
        Segment::Link { label, url } => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(url),
            escape_html(label)
        ),
    }
}
