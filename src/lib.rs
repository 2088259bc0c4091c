//! Playground library exports for the binary and integration tests

pub mod core;
pub mod interpreter;
pub mod tui;

#[cfg(test)]
pub mod test_support;
