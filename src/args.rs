use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Class-name utility CLI - merges class values and resolves component variants
#[derive(Parser, Debug)]
#[command(name = "class-variants-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable debug logging on stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge class values into one class string
    Cx(CxArgs),
    /// Resolve a variant config for a selection
    Variants(VariantsArgs),
}

/// Arguments for the cx command
#[derive(Args, Debug, Clone)]
pub struct CxArgs {
    /// Parse each value as JSON instead of taking it literally
    #[arg(
        long = "json",
        default_value_t = false,
        help = "Parse each value as JSON (strings, objects of flags, null, ...)"
    )]
    pub json: bool,

    /// Values to merge, in order
    #[arg(value_name = "VALUE", num_args = 0..)]
    pub values: Vec<String>,
}

/// Arguments for the variants command
#[derive(Args, Debug, Clone)]
pub struct VariantsArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        required = true,
        help = "Path to the variant config (.yaml, .yml or .json)"
    )]
    pub config: PathBuf,

    /// Selected variant name
    #[arg(long = "variant", value_name = "NAME")]
    pub variant: Option<String>,

    /// Selected size name
    #[arg(long = "size", value_name = "NAME")]
    pub size: Option<String>,

    /// Reject configs whose groups lack a "default" entry
    #[arg(long = "strict", default_value_t = false)]
    pub strict: bool,
}
