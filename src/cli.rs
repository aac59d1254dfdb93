//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod common;
pub mod demo;
pub mod explain;
pub mod init;
pub mod logging;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
