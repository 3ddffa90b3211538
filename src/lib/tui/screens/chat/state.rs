//! Chat screen view state
//!
//! The log and input field live in the controller; this only tracks what
//! the screen needs between frames.

/// Spinner frames for the typing placeholder
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Status bar note after a failed backend call
pub const REPLY_FAILED_STATUS: &str = "Last reply failed, see log";

/// Sentinel meaning "stick to the newest entry"
const SCROLL_BOTTOM: u16 = u16::MAX;

pub struct ChatState {
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Largest offset seen at the last render
    pub max_scroll: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Shown in the status bar until the next reply succeeds
    pub status_message: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            scroll_offset: SCROLL_BOTTOM,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Scroll messages up, resolving the bottom sentinel first
    pub fn scroll_up(&mut self) {
        let current = self.effective_scroll();
        self.scroll_offset = current.saturating_sub(1);
    }

    /// Scroll messages down; reaching the end sticks to the bottom again
    pub fn scroll_down(&mut self) {
        let current = self.effective_scroll();
        self.scroll_offset = if current.saturating_add(1) >= self.max_scroll {
            SCROLL_BOTTOM
        } else {
            current + 1
        };
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved during render based on content height
        self.scroll_offset = SCROLL_BOTTOM;
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_offset == SCROLL_BOTTOM
    }

    /// Offset to draw with, clamped to the content
    pub fn effective_scroll(&self) -> u16 {
        if self.is_at_bottom() {
            self.max_scroll
        } else {
            self.scroll_offset.min(self.max_scroll)
        }
    }

    /// Note how the latest reply ended. The user already sees the failure
    /// text in the log; this points them at the diagnostic log.
    pub fn record_reply(&mut self, failed: bool) {
        self.status_message = failed.then(|| REPLY_FAILED_STATUS.to_string());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.loading_frame % SPINNER_FRAMES.len()]
    }
}
