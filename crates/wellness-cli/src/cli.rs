//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wellness_recommend::DEFAULT_TOP_K;

#[derive(Parser)]
#[command(
    name = "wellness-recommender",
    version,
    about = "Wellness travel recommender - classify travelers and rank destinations",
    long_about = "Classify a traveler into one of three wellness-tourism archetypes \
                  from a seven-question survey, then rank wellness destinations \
                  using archetype-specific affinity weights."
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
    /// Classify survey answers into a traveler archetype.
    Classify(ClassifyArgs),

    /// Classify, then rank wellness destinations for the archetype.
    Recommend(RecommendArgs),

    /// List the traveler archetypes.
    Profiles,

    /// Show statistics over the destination dataset.
    Summary(SummaryArgs),
}

/// Survey answers, from flags and/or a JSON file.
#[derive(Args)]
pub struct AnswerInput {
    /// One answer as q<N>=<option-index> (repeatable, e.g. --answer q1=3).
    #[arg(long = "answer", value_name = "Q=IDX")]
    pub answers: Vec<String>,

    /// JSON file holding all answers, e.g. {"q1":3,"q2":0,...}.
    #[arg(long = "answers-file", value_name = "PATH")]
    pub answers_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: AnswerInput,
}

#[derive(Parser)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub input: AnswerInput,

    /// Directory containing the destination CSV files.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Number of destinations to return.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_K)]
    pub top: usize,

    /// Restrict to wellness theme codes (repeatable).
    #[arg(long = "theme", value_name = "CODE")]
    pub themes: Vec<String>,

    /// Restrict to region codes (repeatable).
    #[arg(long = "region", value_name = "CODE")]
    pub regions: Vec<u32>,

    /// User name recorded in the export metadata.
    #[arg(long = "user", value_name = "NAME")]
    pub user: Option<String>,

    /// Write the ranked list as CSV to this path.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Directory containing the destination CSV files.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: PathBuf,
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
