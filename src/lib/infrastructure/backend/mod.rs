//! Chat backend client
//!
//! - `types.rs`: wire request/reply and error types
//! - `traits.rs`: the `ChatBackend` seam used by the controller
//! - `http.rs`: reqwest implementation against the JSON chat route

mod http;
mod traits;
mod types;

pub use http::HttpChatBackend;
pub use traits::ChatBackend;
pub use types::{BackendError, ChatReply, ChatRequest};
