//! CLI module for Oppsum.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Oppsum - YouTube captions and AI summaries
///
/// Search YouTube, read a video's captions as a normalized timeline, and
/// generate structured AI summaries, from the terminal or over HTTP.
/// The name comes from the Norwegian "oppsummere", to sum up.
#[derive(Parser, Debug)]
#[command(name = "oppsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search YouTube videos
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (1-50)
        #[arg(short, long)]
        max_results: Option<u32>,

        /// Continuation token from a previous search
        #[arg(long)]
        page_token: Option<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Fetch captions for a video
    Captions {
        /// YouTube URL or video ID
        video: String,

        /// Preferred caption language (2-character code)
        #[arg(short, long)]
        lang: Option<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Generate an AI summary of a video's captions
    Summarize {
        /// YouTube URL or video ID
        video: String,

        /// Caption language to summarize (2-character code)
        #[arg(short, long)]
        lang: Option<String>,

        /// Video title for the prompt (defaults to the last search's result)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Replay captions in real time, highlighting the current line
    Watch {
        /// YouTube URL or video ID
        video: String,

        /// Preferred caption language (2-character code)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check API keys and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
