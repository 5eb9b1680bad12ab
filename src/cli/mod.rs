// src/cli/mod.rs
//! CLI argument definitions and command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::execute;
