use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind CSS catalog CLI - Inspect and export typed Tailwind utility classes
#[derive(Parser, Debug)]
#[command(name = "tailwind-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        default_value_t = false,
        help = "Enable debug logging"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories, or the utilities of one category
    List(ListArgs),
    /// Resolve a Category.NAME path, or find where a class is defined
    Lookup(LookupArgs),
    /// Apply modifiers to a utility
    Apply(ApplyArgs),
    /// Export the catalog as a JSON manifest
    Manifest(ManifestArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Category path, e.g. "Spacing.Gap"
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    #[arg(
        long = "json",
        default_value_t = false,
        help = "Print entries as JSON"
    )]
    pub json: bool,
}

/// Arguments for the lookup command
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Dotted path, e.g. "Typography.FontSize.BASE"
    #[arg(value_name = "PATH", required_unless_present = "class")]
    pub path: Option<String>,

    #[arg(
        long = "class",
        value_name = "CLASS",
        conflicts_with = "path",
        help = "Find the constants defining this Tailwind class"
    )]
    pub class: Option<String>,
}

/// Arguments for the apply command
#[derive(Parser, Debug, Clone)]
pub struct ApplyArgs {
    #[arg(
        short = 'm',
        long = "modifier",
        value_name = "PREFIX",
        required = true,
        num_args = 1,
        help = "Breakpoint or state prefix (sm, md, lg, xl, 2xl, hover, focus, active, dark, disabled); repeat to nest, innermost first"
    )]
    pub modifiers: Vec<String>,

    /// Tailwind class or Category.NAME path
    #[arg(value_name = "UTILITY")]
    pub utility: String,
}

/// Arguments for the manifest command
#[derive(Parser, Debug, Clone)]
pub struct ManifestArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the manifest to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "TAILWIND_CATALOG_CONFIG",
        help = "Path to configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Write compact JSON regardless of configuration"
    )]
    pub compact: bool,
}

impl ApplyArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.modifiers.is_empty() {
            return Err("At least one modifier must be provided".to_string());
        }
        Ok(())
    }
}
