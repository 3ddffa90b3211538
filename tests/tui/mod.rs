//! TUI unit tests module
//!
//! - chat/: input, state and rendering tests
