//! Clap argument definitions for the `keygap` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "keygap", version)]
#[command(about = "Find the job-description keywords a resume is missing")]
pub struct Cli {
    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `keygap missing`.
#[derive(Args, Debug, Clone)]
pub struct MissingCommand {
    /// Job description file (- for stdin)
    pub job: String,

    /// Resume text file (- for stdin)
    #[arg(short = 'r', long)]
    pub resume: Option<String>,

    /// Maximum keywords to return [default: 80]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `keygap keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    /// Job description file (- for stdin)
    pub job: String,

    /// Maximum keywords to show [default: 80]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `keygap role`.
#[derive(Args, Debug, Clone)]
pub struct RoleCommand {
    /// Job description file (- for stdin)
    pub job: Option<String>,

    /// Role from the resume; wins over the job text
    #[arg(long)]
    pub role: Option<String>,

    /// Resume headline; used when no role is given
    #[arg(long)]
    pub headline: Option<String>,

    /// JSON file with jobText and resume fields (- for stdin)
    #[arg(long, conflicts_with = "job")]
    pub input: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `keygap init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.keygap.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `keygap` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List ranked job-description keywords missing from a resume
    #[command(after_help = "\
EXAMPLES:
  keygap missing job.txt --resume resume.txt
  keygap missing job.txt -r resume.txt -n 20 --json
  pbpaste | keygap missing - -r resume.txt")]
    Missing(MissingCommand),

    /// Show ranked keywords with their counts and scores
    Keywords(KeywordsCommand),

    /// Guess the role title a job description is hiring for
    #[command(after_help = "\
PRIORITY:
  1. --role, then --headline (or resume.formData.role / resume.headline in --input)
  2. A labeled line in the job text: Title: ..., Role - ..., Position: ...
  3. The first non-blank line of the job text
  4. A short capitalized line among the first ten

INPUT JSON:
  {\"jobText\": \"...\", \"resume\": {\"formData\": {\"role\": \"...\"}, \"headline\": \"...\"}}")]
    Role(RoleCommand),

    /// Initialize keygap configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// List configuration files and validate them
    Check,
}

impl Commands {
    /// Whether the command needs merged configuration.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
