use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AskArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Attach the per-record score breakdown to the output.
    #[arg(long, default_value_t = false)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct TopicsArgs {
    #[command(subcommand)]
    pub command: TopicsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TopicsCommand {
    /// List topic keys with their keyword synonyms.
    Ls,
    /// Dump one topic record by key.
    Show { key: String },
}
