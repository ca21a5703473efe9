pub mod commands;
pub mod forms;
pub mod io;
pub mod output;
pub mod ui;

use crate::api::YnabClient;
use crate::cli::commands::create_transaction;
use crate::cli::ui::prompts::{DialoguerPrompter, Prompter};
use crate::cli::ui::test_mode::ScriptedPrompter;
use crate::config::Config;
use crate::errors::AppError;

/// Entry point of the binary: reads configuration, builds the API client and
/// runs the transaction command with terminal prompts (or scripted answers
/// when `YNAB_TEST_INPUTS` is set).
pub fn run_cli() -> Result<(), AppError> {
    let config = Config::load()?;
    tracing::debug!(?config, "configuration loaded");
    let client = YnabClient::from_config(&config)?;

    let mut prompter: Box<dyn Prompter> = match ScriptedPrompter::from_env() {
        Some(scripted) => Box::new(scripted),
        None => Box::new(DialoguerPrompter::new()),
    };

    create_transaction::run(&config, &client, prompter.as_mut())?;
    Ok(())
}
