//! # Application Module
//!
//! - [`controller`] - chat view controller: log, input field, send/receive cycle
//! - [`input`] - single-line input field
//! - [`stdio`] - line-oriented front end over stdin/stdout

pub mod controller;
pub mod input;
pub mod stdio;
