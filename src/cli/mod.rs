//! Command-line interface.
//!
//! Thin glue between the pipeline's `check`/`in`/`out` protocol and
//! [`crate::core::resource::Resource`].

pub mod check;
pub mod get;
pub mod output;
pub mod put;
pub mod request;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vaultsync - keep a secret store and a pipeline workspace in sync.
#[derive(Parser)]
#[command(
    name = "vaultsync",
    about = "Synchronize secret trees between a secret store and a pipeline workspace",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report the current version of the watched secret tree
    Check,

    /// Export the watched secret tree into a directory
    In {
        /// Destination directory
        dir: PathBuf,
    },

    /// Import secret files from a directory into the store
    Out {
        /// Source directory
        dir: PathBuf,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Check => check::execute(),
        In { dir } => get::execute(&dir),
        Out { dir } => put::execute(&dir),
    }
}
