//! CLI argument definitions for the report-definition generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rdl-gen",
    version,
    about = "Generate report-definition (RDL) files from column and group definitions",
    long_about = "Generate report-definition (RDL) files from column and group definitions.\n\n\
                  Each definition file lists the columns of a dataset and the groups\n\
                  that bucket its rows; the output is a single table report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
    /// Generate one report from a definition file.
    Generate(GenerateArgs),

    /// Generate the built-in employee sample reports.
    Samples(SamplesArgs),

    /// Show the planned table layout of a definition without writing it.
    Inspect(InspectArgs),
}

/// Options shared by every command that writes reports.
#[derive(Parser)]
pub struct TemplateArgs {
    /// TOML file overriding the built-in report template.
    #[arg(long = "template", value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Stamp the authoring metadata with the current UTC time.
    #[arg(long = "stamp-now")]
    pub stamp_now: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Report definition (TOML).
    #[arg(value_name = "DEFINITION")]
    pub definition: PathBuf,

    /// Output file (default: the definition's `output`, else <DEFINITION>.rdl).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub template: TemplateArgs,
}

#[derive(Parser)]
pub struct SamplesArgs {
    /// Directory the sample reports are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "reports")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub template: TemplateArgs,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Report definition (TOML).
    #[arg(value_name = "DEFINITION")]
    pub definition: PathBuf,
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
