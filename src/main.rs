use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use classroom_manager::cli::command::COMMAND_HELP;
use classroom_manager::config::{Config, DEFAULT_DATA_FILE, DEFAULT_LOG_DIR};
use classroom_manager::logger;

/// A terminal-based Virtual Classroom Manager that handles class scheduling,
/// student enrollment, and assignment submissions.
#[derive(Parser)]
#[command(name = "classroom-manager", version, about, long_about = None, after_help = COMMAND_HELP)]
struct Cli {
    /// Path of the JSON data file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
    /// Directory the log file is appended to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,
    /// Mirror log records to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Overwrite existing data on truncate_data without asking
    #[arg(short = 'y', long)]
    yes: bool,
    /// Command to run (see the list below)
    command: String,
    /// Arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    arguments: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config { data_path: cli.data_file, log_dir: cli.log_dir, verbose: cli.verbose, assume_yes: cli.yes };

    logger::init(&config);
    log::info!("Running '{}' against '{}'", cli.command, config.data_path.display());

    let outcome = classroom_manager::run(&config, &cli.command, &cli.arguments);

    ExitCode::from(outcome.exit_code())
}
