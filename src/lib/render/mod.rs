//! Message rendering
//!
//! Bot text goes through an allow-list transform: `[label](url)` links and
//! line breaks are the only markup recognised, everything else stays text.
//! Front ends turn the resulting [`RenderedMessage`] into terminal lines
//! ([`to_plain`], ratatui in the TUI) or HTML fragments ([`to_html`]).

mod clock;
mod html;
mod markup;

pub use clock::{Clock, FixedClock, SystemClock, format_clock};
pub use html::{escape_html, to_html};
pub use markup::{
    RenderedLine, RenderedMessage, Segment, render_bot_message, render_message,
    render_user_message, to_plain,
};
