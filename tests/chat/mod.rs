//! Chat tests module

pub mod controller_tests;
pub mod stdio_tests;
