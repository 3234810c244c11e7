mod answers;
mod bank;
mod cli;
mod error;
mod report;
mod scoring;
mod session;
mod theme;
mod types;

use crate::error::AqError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, AqError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let bank = bank::builtin();

    match cli.command {
        cli::Commands::Run(cmd) => {
            // The theme is the only styling source; a missing file is fatal
            // before anything is rendered.
            let theme = theme::load_theme(&cmd.theme)?;
            tracing::info!(questions = bank.len(), "starting interactive session");

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let mut session = session::Session::new(&bank, theme);
            match session.run(&mut input, &mut output)? {
                session::SessionOutcome::Submitted(report) => {
                    tracing::info!(total = report.total, band = ?report.band, "session scored");
                    Ok(exit_code::SUCCESS)
                }
                session::SessionOutcome::Quit => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Score(cmd) => {
            let answers = answers::load_answers(&cmd.answers, &bank)?;
            match scoring::build_report(&answers, &bank) {
                Some(score_report) => {
                    let output_format = match cmd.format {
                        cli::ReportFormat::Text => report::OutputFormat::Text,
                        cli::ReportFormat::Json => report::OutputFormat::Json,
                        cli::ReportFormat::Md => report::OutputFormat::Md,
                    };
                    let rendered = report::render(&score_report, output_format)?;
                    println!("{rendered}");
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    let numbers = scoring::unanswered(&answers, &bank)
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    eprintln!("{}", session::INCOMPLETE_WARNING);
                    eprintln!("unanswered: {numbers}");
                    Ok(exit_code::INCOMPLETE)
                }
            }
        }
        cli::Commands::Questions => {
            for (index, question) in bank.iter().enumerate() {
                println!("{}. {}", index + 1, question.prompt);
                for (key, option) in &question.options {
                    println!("   {}. {} [{}]", key, option.text, option.score);
                }
                println!();
            }
            println!(
                "{} questions, score range {}..={}",
                bank.len(),
                bank.min_score(),
                bank.max_score()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
