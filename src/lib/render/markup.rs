//! Allow-list markup for message bodies

use crate::domain::{Message, Sender};
use once_cell::sync::Lazy;
use regex::Regex;

/// `[label](url)`, shortest match, never spanning a line break
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// A run of text or a link inside one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link { label: String, url: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    fn text(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Text(text.to_string())]
        };
        Self { segments }
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Link { label, url } => Some((label.as_str(), url.as_str())),
            Segment::Text(_) => None,
        })
    }
}

/// A message ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub urgent: bool,
    pub lines: Vec<RenderedLine>,
    pub time: String,
}

/// Render a bot reply: links and line breaks are interpreted, nothing else.
pub fn render_bot_message(text: &str, urgent: bool, time: &str) -> RenderedMessage {
    RenderedMessage {
        sender: Sender::Bot,
        urgent,
        lines: text.split('\n').map(parse_line).collect(),
        time: time.to_string(),
    }
}

/// Render user input verbatim, one text run per line.
pub fn render_user_message(text: &str, time: &str) -> RenderedMessage {
    RenderedMessage {
        sender: Sender::User,
        urgent: false,
        lines: text.split('\n').map(RenderedLine::text).collect(),
        time: time.to_string(),
    }
}

pub fn render_message(message: &Message) -> RenderedMessage {
    match message.sender {
        Sender::User => render_user_message(&message.text, &message.time),
        Sender::Bot => render_bot_message(&message.text, message.urgent, &message.time),
    }
}

/// Terminal text for a rendered body; links print as `label <url>`.
pub fn to_plain(message: &RenderedMessage) -> String {
    message
        .lines
        .iter()
        .map(|line| {
            line.segments
                .iter()
                .map(|segment| match segment {
                    Segment::Text(text) => text.clone(),
                    Segment::Link { label, url } => format!("{label} <{url}>"),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_line(line: &str) -> RenderedLine {
    let mut segments = Vec::new();
    let mut last = 0;

    for captures in LINK_RE.captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(line[last..whole.start()].to_string()));
        }
        segments.push(Segment::Link {
            label: captures[1].to_string(),
            url: captures[2].to_string(),
        });
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::Text(line[last..].to_string()));
    }

    RenderedLine { segments }
}
