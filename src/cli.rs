//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can build the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "adbar",
    version,
    about = "Ad-marker progress bar - project ad segments onto a playback progress track",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a marker list onto the progress track
    Render(RenderArgs),

    /// Replay an event script through a progress session
    Replay(ReplayArgs),

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with the marker list ("-" reads stdin)
    pub markers: PathBuf,

    /// Duration of the source in milliseconds
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: i64,

    /// Track width in pixels (defaults to track.width_px from the config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Playback position in milliseconds
    #[arg(short, long)]
    pub position: Option<i64>,

    /// Also draw the track as a terminal progress bar
    #[arg(long)]
    pub bar: bool,

    /// Print the geometry as JSON
    #[arg(long, conflicts_with = "bar")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON-lines event script
    pub script: PathBuf,

    /// Track width in pixels (defaults to track.width_px from the config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Also draw the track as a terminal progress bar
    #[arg(long)]
    pub bar: bool,

    /// Print the geometry as JSON
    #[arg(long, conflicts_with = "bar")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Print the configuration file location
    Path,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
