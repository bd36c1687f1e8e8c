use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tagdive")]
#[command(version)]
#[command(about = "Tag summaries and question deep dives from exported support chats")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both stages: summary table, then per-tag deep dives
    Run {
        /// Working directory (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<String>,

        /// JSON config overriding the built-in defaults
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Extract and write the top-tags summary table
    Summary {
        #[arg(short, long)]
        dir: Option<String>,

        #[arg(short, long)]
        config: Option<String>,
    },

    /// Extract per-tag question lists and keyword tables
    Deepdive {
        #[arg(short, long)]
        dir: Option<String>,

        #[arg(short, long)]
        config: Option<String>,

        /// Process only this tag key
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Render a text report from the produced artifacts
    Report {
        #[arg(short, long)]
        dir: Option<String>,
    },

    /// Show which inputs resolve in the working directory
    Status {
        #[arg(short, long)]
        dir: Option<String>,

        #[arg(short, long)]
        config: Option<String>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}
