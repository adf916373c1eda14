use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokenmeter_history::{ExportFormat, Theme};

#[derive(Parser)]
#[command(name = "tokenmeter")]
#[command(version)]
#[command(about = "Token count, cost estimates and trimming hints for LLM prompts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the text comes from: the argument, a file, or stdin
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to analyze (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate tokens and cost
    Estimate {
        #[command(flatten)]
        input: InputArgs,

        /// Model name as listed by `tokenmeter models`
        #[arg(short, long)]
        model: Option<String>,

        /// Currency label, e.g. "EUR (€)"
        #[arg(short, long)]
        currency: Option<String>,

        /// Output/input ratio in percent for the projection
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        ratio: Option<u8>,

        /// Save the estimate to history
        #[arg(long)]
        save: bool,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Suggest ways to shorten the text
    Optimize {
        #[command(flatten)]
        input: InputArgs,

        /// Print the text with every applicable suggestion applied
        #[arg(long)]
        apply: bool,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Compare tokens and cost across all models
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Currency label, e.g. "CNY (¥)"
        #[arg(short, long)]
        currency: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Per-paragraph tokens and frequent words
    Breakdown {
        #[command(flatten)]
        input: InputArgs,

        /// Model name as listed by `tokenmeter models`
        #[arg(short, long)]
        model: Option<String>,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List supported models and prices
    Models,

    /// View saved estimates
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Only records whose text contains this (case-insensitive)
        #[arg(long, global = true)]
        search: Option<String>,

        /// Only starred records
        #[arg(long, global = true)]
        starred: bool,

        /// At most this many records, newest first
        #[arg(short = 'n', long, global = true)]
        limit: Option<usize>,

        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List records (default)
    List,
    /// Star a record
    Star { id: String },
    /// Remove the star from a record
    Unstar { id: String },
    /// Delete a record
    Remove { id: String },
    /// Delete all records
    Clear,
    /// Export records as csv or json
    Export {
        /// csv or json
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        /// Destination file (defaults to token_history_<date>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings (default)
    Show,
    /// Change one or more settings
    Set {
        #[arg(long)]
        currency: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        ratio: Option<u8>,

        /// light, dark or system
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// Restore defaults
    Reset,
}
