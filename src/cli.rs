//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sentinel - LLM-written progress reports for GitHub projects
#[derive(Debug, Parser)]
#[command(name = "sentinel", version, about)]
pub struct Cli {
    /// Path to config file (falls back to SENTINEL_CONFIG, then config/default.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize recent activity of a project and save the report
    Report {
        /// Repository as owner/repo
        project: String,

        /// Number of days to cover
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=7))]
        days: u32,
    },

    /// Summarize an activity export that is already on disk
    Generate {
        /// Raw Markdown export
        #[arg(short, long, value_name = "FILE")]
        activity: PathBuf,
    },

    /// Manage subscribed repositories
    Subscriptions {
        #[command(subcommand)]
        command: SubscriptionCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    /// Print every subscribed repository
    List,
    /// Subscribe to a repository
    Add { project: String },
    /// Unsubscribe from a repository
    Remove { project: String },
}
