use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{info, warn};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wotd::core::WotdError;
use wotd::core::config::{self, CliOverrides, ResolvedConfig, RetryPolicy, WotdConfig};
use wotd::core::speech::Speaker;
use wotd::core::startup;
use wotd::core::state::App;
use wotd::tui;

#[derive(Parser)]
#[command(name = "wotd", version, about = "Word of the day, refreshed at midnight")]
struct Args {
    /// Word list to read (default: Words_alphabetized.txt next to the executable)
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,

    /// Print the word to stdout and exit instead of opening the overlay
    #[arg(long)]
    print: bool,

    /// Pick for this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", requires = "print")]
    date: Option<NaiveDate>,

    /// Never pronounce the word
    #[arg(long)]
    no_speech: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Config is read before logging exists; its error is reported once the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (WotdConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        words_file: args.words.clone(),
        no_speech: args.no_speech,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(resolved.log_file.as_deref(), args.print);
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }
    info!("wotd starting up with words file {}", resolved.words_file.display());

    let result = if args.print {
        print_word(&resolved, args.date).await
    } else {
        show_overlay(resolved).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("wotd: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn show_overlay(settings: ResolvedConfig) -> Result<(), WotdError> {
    let (catalog, selection) =
        startup::bootstrap(&settings.words_file, || Local::now().date_naive(), &settings.retry)
            .await?;
    let app = App::with_selection(catalog, selection, settings.retry);
    let speaker = Speaker::new(&settings.speech_command, settings.speech_enabled);
    tui::run(app, speaker, settings.display)?;
    info!("wotd shutting down");
    Ok(())
}

/// Headless mode: one attempt, no waiting, result on stdout.
async fn print_word(settings: &ResolvedConfig, date: Option<NaiveDate>) -> Result<(), WotdError> {
    let policy = RetryPolicy {
        startup_attempts: 1,
        ..settings.retry
    };
    let today = || date.unwrap_or_else(|| Local::now().date_naive());
    let (_, selection) = startup::bootstrap(&settings.words_file, today, &policy).await?;
    println!("{}", selection.entry);
    Ok(())
}

fn init_logging(log_file: Option<&Path>, print_mode: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            match File::create(path) {
                Ok(file) => {
                    let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
                }
                Err(e) => eprintln!("wotd: cannot open log file {}: {e}", path.display()),
            }
        }
        // The overlay owns the terminal; only headless runs may log to stderr
        None if print_mode => {
            let _ = TermLogger::init(
                LevelFilter::Warn,
                log_config,
                TerminalMode::Stderr,
                ColorChoice::Auto,
            );
        }
        None => {}
    }
}
