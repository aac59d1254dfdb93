//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default schema file name
pub const DEFAULT_SCHEMA_PATH: &str = "fieldtags.toml";

/// Output format for fieldtags commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// fieldtags CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "fieldtags")]
#[command(about = "Declarative field validation driven by rule tags")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available fieldtags subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter fieldtags.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate JSON Lines records against a schema
    Check {
        /// Record files (reads stdin when omitted or "-")
        records: Vec<String>,

        /// Schema file
        #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
        schema: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show how a rule tag is parsed
    Explain {
        /// Rule tag, e.g. "min=2,max=32"
        tag: String,

        /// Reject unknown tokens and malformed arguments
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Validate the two built-in sample users
    Demo,
}
