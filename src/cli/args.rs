//! CLI argument definitions using clap
//!
//! Commands:
//! - schemacast cast --schema <path> --input <path> [--merge <path>] [--config <path>]
//! - schemacast update --old <path> --new <path>
//! - schemacast dump --input <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// schemacast - Schema-driven casting of untyped JSON into ordered, typed output
#[derive(Parser, Debug)]
#[command(name = "schemacast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cast an input document against a schema
    Cast {
        /// Path to the schema document
        #[arg(long)]
        schema: PathBuf,

        /// Path to the input JSON document
        #[arg(long)]
        input: PathBuf,

        /// Path to a JSON object of per-field override values
        #[arg(long)]
        merge: Option<PathBuf>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Merge a partial document into a previous cast output
    Update {
        /// Path to the previous output
        #[arg(long)]
        old: PathBuf,

        /// Path to the partial input
        #[arg(long)]
        new: PathBuf,
    },

    /// Render a cast output as plain, key-sorted JSON
    Dump {
        /// Path to the cast output
        #[arg(long)]
        input: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
