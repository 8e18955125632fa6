//! Clap derive structures for the `slider` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// slider -- browse the product slider catalog from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "slider",
    version,
    about = "Browse the product slider catalog feed from the command line",
    long_about = "Fetches the product catalog feed, decodes it, and shows its\n\
        categories and the products of the selected category.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Feed URL (overrides config)
    #[arg(long, short = 'e', env = "SLIDER_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Base URL that image paths are resolved against (overrides config)
    #[arg(long, env = "SLIDER_IMAGE_BASE", global = true)]
    pub image_base: Option<String>,

    /// Read the feed from a local file instead of fetching it
    #[arg(long, short = 'f', global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "SLIDER_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `defaults.color`]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "SLIDER_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "SLIDER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Fail when the feed reports a non-success status
    #[arg(long, global = true)]
    pub strict: bool,
}

impl GlobalOpts {
    pub fn output_format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List feed categories
    #[command(alias = "cats", alias = "c")]
    Categories(CategoriesArgs),

    /// List the products of one category
    #[command(alias = "p")]
    Products(ProductsArgs),

    /// Show categories and the selected category's products together
    Show(ShowArgs),

    /// Decode a saved feed payload without touching the network
    Decode(DecodeArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Catalog commands ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Category index to mark as selected
    #[arg(long, short = 'c', value_name = "INDEX")]
    pub category: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    /// Category index (0 = first category in the feed)
    #[arg(long, short = 'c', value_name = "INDEX")]
    pub category: Option<usize>,

    /// Include resolved image URLs
    #[arg(long)]
    pub with_images: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Category index to select
    #[arg(long, short = 'c', value_name = "INDEX")]
    pub category: Option<usize>,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Path to the payload (`-` for stdin)
    pub path: PathBuf,

    /// Re-encode the decoded feed in the endpoint's wire shape
    #[arg(long)]
    pub wire: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
