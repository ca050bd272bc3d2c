//! Command-line arguments for `scripture-gallery`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gallery_cli::session::SessionEvent;

#[derive(Parser)]
#[command(
    name = "scripture-gallery",
    version,
    about = "Browse the scripture art gallery from the terminal",
    long_about = "Group and order artworks by book, and replay lightbox sessions \
                  against an in-memory router to inspect selection, reveal and \
                  URL behavior."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Gallery configuration file.
    #[arg(
        long = "config",
        value_name = "PATH",
        default_value = "gallery.toml",
        global = true
    )]
    pub config: PathBuf,

    /// Override the configured locale.
    #[arg(long = "locale", value_name = "LOCALE", global = true)]
    pub locale: Option<String>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical book order with translated labels.
    Books,

    /// Print artworks grouped by book in canonical order.
    Groups(ContentArgs),

    /// Replay a lightbox session and print the view after each event.
    Browse(BrowseArgs),

    /// Match a playlist title against an episode list.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct ContentArgs {
    /// Artwork JSON file (an array, or an object with an `artworks` array).
    #[arg(value_name = "CONTENT")]
    pub content: PathBuf,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Artwork JSON file.
    #[arg(value_name = "CONTENT")]
    pub content: PathBuf,

    /// Initial query parameter, as `key=value`. Repeatable.
    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub query: Vec<(String, String)>,

    /// Render as a signed-in member.
    #[arg(long = "member")]
    pub member: bool,

    /// Event to apply: open:<id>, next, prev, close, swipe:<index>, reveal, nav.
    #[arg(long = "event", value_name = "EVENT")]
    pub events: Vec<SessionEvent>,

    /// Print the session report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Episode JSON file (array of `{id, title, number}`).
    #[arg(value_name = "EPISODES")]
    pub episodes: PathBuf,

    /// Playlist item title.
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
