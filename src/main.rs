use anyhow::Context;
use clap::Parser;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use timed_quiz::config::{DEFAULT_CSV_PATH, DEFAULT_TIME_LIMIT_SECS};
use timed_quiz::{QuizConfig, SessionController, load_questions, logger, write_outcome};

#[derive(Debug, Parser)]
#[command(name = "timed-quiz", version, about = "Timed quiz over a CSV of questions and answers")]
struct Cli {
    /// CSV file of `question,answer` records
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    limit: u64,

    /// Ask the questions in random order
    #[arg(long)]
    shuffle: bool,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Cli> for QuizConfig {
    fn from(cli: Cli) -> Self {
        Self {
            csv_path: cli.csv,
            time_limit: Duration::from_secs(cli.limit),
            shuffle: cli.shuffle,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logger::init(path)?;
    }

    let config = QuizConfig::from(cli);
    let mut bank = load_questions(&config.csv_path)?;
    if config.shuffle {
        bank.shuffle(&mut rand::thread_rng());
    }

    let controller = SessionController::new(&config);
    let outcome = controller.run(Arc::new(bank), BufReader::new(io::stdin()), io::stdout())?;

    write_outcome(&mut io::stdout().lock(), &outcome).context("failed to write quiz result")?;
    Ok(())
}
