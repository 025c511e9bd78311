//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use sdkfind::ops::LocateOptions;
use sdkfind::Platform;

/// sdkfind - locate installed geometry-modeling toolkits
#[derive(Parser)]
#[command(name = "sdkfind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the global/project ones
    #[arg(long, global = true, env = "SDKFIND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate the toolkit and print what was found
    Locate(LocateArgs),

    /// Show compile/link flags for the located toolkit
    Flags(FlagsArgs),

    /// List the components the toolkit descriptor knows about
    Components,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Search options shared by `locate` and `flags`.
#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Installation root; when given, nothing else is searched
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Component to locate (repeatable, case-insensitive)
    #[arg(short, long = "component")]
    pub components: Vec<String>,

    /// Architecture tag, bypassing detection
    #[arg(long)]
    pub arch: Option<String>,

    /// Platform layout to assume (windows, linux, macos)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Fail when the toolkit is not found
    #[arg(long)]
    pub required: bool,

    /// Do not report a missing toolkit
    #[arg(short, long)]
    pub quiet: bool,
}

impl SearchArgs {
    pub fn to_options(&self, color: bool) -> LocateOptions {
        LocateOptions {
            root: self.root.clone(),
            components: self.components.clone(),
            arch: self.arch.clone(),
            platform: self.platform,
            required: self.required,
            quiet: self.quiet,
            color,
        }
    }
}

#[derive(Args)]
pub struct LocateArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The full resolution as JSON
    Json,
    /// NAME=value lines
    Env,
}

#[derive(Args)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Show compile flags only
    #[arg(long, conflicts_with = "link")]
    pub compile: bool,

    /// Show link flags only
    #[arg(long)]
    pub link: bool,

    /// Use debug libraries
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
