use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytdlgui")]
#[command(about = "youtube-dl front-end: language tables, video info and thumbnails")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file layered over the default one
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub language: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the UI string table
    Lang(LangArgs),

    /// Get video information
    Info(InfoArgs),

    /// Download a video's thumbnail
    Thumbnail(ThumbnailArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub action: LangAction,
}

#[derive(Subcommand)]
pub enum LangAction {
    /// Show which language is loaded
    Show,

    /// Print the text of one or more keys
    Get {
        /// Key names, matched case-insensitively
        keys: Vec<String>,
    },

    /// Print every key with its current text
    Dump {
        /// Print JSON instead of key=value lines
        #[arg(long)]
        json: bool,
    },

    /// List language files in a directory
    List {
        /// Directory to scan (default: the configured language directory)
        dir: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct InfoArgs {
    /// Video URL
    pub url: String,

    /// Output format (json, table)
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args)]
pub struct ThumbnailArgs {
    /// Video URL
    pub url: String,

    /// Output file (default: thumbnail.<ext> in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
