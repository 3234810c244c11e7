use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aqcheck",
    version,
    about = "Run and score the Adaptability Quotient (AQ) questionnaire"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer the questionnaire interactively in the terminal
    Run(RunCommand),
    /// Score a saved answers file without an interactive session
    Score(ScoreCommand),
    /// Print the question bank with option keys and scores
    Questions,
}

#[derive(Args)]
pub struct RunCommand {
    /// Theme file applied to terminal output
    #[arg(long, default_value = "theme.toml")]
    pub theme: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub answers: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
