use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{AskArgs, ClassifyArgs, TopicsArgs, TopicsCommand};

#[derive(Debug, Parser)]
#[command(name = "counsel")]
#[command(about = "Rule-based legal guidance engine", version)]
pub struct Cli {
    /// Service root; holds the append-only request log.
    #[arg(long, default_value = ".counsel")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a query, consulting the remote provider when configured.
    Ask(AskArgs),
    /// Score a query against the topic table; never goes remote.
    Classify(ClassifyArgs),
    /// Inspect the loaded topic table.
    Topics(TopicsArgs),
    /// Provider, table size, and table source.
    Status,
}
