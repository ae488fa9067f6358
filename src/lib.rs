use crate::cli::command::Command;
use crate::cli::dispatcher::{Dispatcher, Outcome, report};
use crate::config::Config;
use crate::store::RosterStore;
use crate::traits::{Confirm, FixedConfirm, StdinConfirm};

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod store;
pub mod traits;

/// Runs one command line against the roster described by `config`, writing
/// all user-facing messages to stdout.
///
/// The command is validated before the data file is touched, so a usage
/// error never creates or rewrites it.
pub fn run(config: &Config, name: &str, args: &[String]) -> Outcome {
    let mut stdout = std::io::stdout();

    let command = match Command::parse(name, args) {
        Ok(command) => command,
        Err(err) => return report(&err, &mut stdout),
    };

    let store = match RosterStore::load(config) {
        Ok(store) => store,
        Err(err) => return report(&err, &mut stdout),
    };

    let confirm: Box<dyn Confirm> = if config.assume_yes { Box::new(FixedConfirm(true)) } else { Box::new(StdinConfirm) };

    Dispatcher::new(store, confirm, stdout).run(&command)
}
