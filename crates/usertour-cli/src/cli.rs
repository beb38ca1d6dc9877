use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use usertour_theme::store::ThemeFormat;
use usertour_theme::SurfaceType;

/// Inspect, render and validate Usertour theme files.
#[derive(Parser, Debug)]
#[command(name = "usertour-theme", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory searched for theme names given without an extension.
    #[arg(long, global = true)]
    pub themes_dir: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the default settings tree.
    Defaults {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the settings of a theme file with every "Auto" color resolved.
    Resolve { file: PathBuf },
    /// Print the CSS custom properties for a theme file.
    Css {
        file: PathBuf,
        /// Limit output to one surface (tooltip, modal, checklist, ...).
        #[arg(long)]
        surface: Option<SurfaceType>,
    },
    /// Check a theme file; exits with status 1 if it has errors.
    Validate { file: PathBuf },
    /// List a theme's variations in evaluation order.
    Variations { file: PathBuf },
    /// Re-print the CSS every time the theme file changes.
    Watch {
        file: PathBuf,
        #[arg(long, default_value_t = SurfaceType::Tooltip)]
        surface: SurfaceType,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl From<Format> for ThemeFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ThemeFormat::Json,
            Format::Yaml => ThemeFormat::Yaml,
            Format::Toml => ThemeFormat::Toml,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
