use chrono::{Local, NaiveDate};

use crate::api::models::{ClearedStatus, FlagColor};
use crate::api::YnabClient;
use crate::cli::commands::CommandDefinition;
use crate::cli::forms::{run_form, FieldSpec};
use crate::cli::io;
use crate::cli::ui::prompts::Prompter;
use crate::config::Config;
use crate::errors::AppError;
use crate::reference::{Lookup, ReferenceData};
use crate::transaction::{submit, SubmitOutcome, TransactionDraft, NO_FLAG};

pub const DEFINITION: CommandDefinition =
    CommandDefinition::new("ynab:transaction", "Creates a new transaction in YNAB");

/// Loads reference data, asks for the transaction, submits it and reports
/// the outcome. A rejected submission is reported but is not an error.
pub fn run(
    config: &Config,
    client: &YnabClient,
    prompter: &mut dyn Prompter,
) -> Result<SubmitOutcome, AppError> {
    run_on(config, client, prompter, Local::now().date_naive())
}

/// [`run`] with an explicit transaction date.
pub fn run_on(
    config: &Config,
    client: &YnabClient,
    prompter: &mut dyn Prompter,
    date: NaiveDate,
) -> Result<SubmitOutcome, AppError> {
    io::print_section(format!("{} ({})", DEFINITION.description, DEFINITION.name));

    let reference = ReferenceData::load(client, &config.budget_id)?;
    io::print_info(reference.summary());
    let answers = run_form(&transaction_form(&reference), prompter)?;
    let draft = TransactionDraft::from_answers(&answers, date)?;
    let payload = draft.to_payload()?;

    let outcome = submit(client, &config.budget_id, &payload);
    report(&outcome);
    Ok(outcome)
}

/// The prompts, in the order they are asked.
pub fn transaction_form(reference: &ReferenceData) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("amount", "Amount"),
        FieldSpec::choice("account", "Account", reference.accounts.clone()),
        FieldSpec::search("payee", "Payee", reference.payees.clone()),
        FieldSpec::search("category", "Category", reference.categories.clone()),
        FieldSpec::text("memo", "Memo (optional)").with_optional(),
        FieldSpec::choice("flag_color", "Flag color (optional)", flag_color_options())
            .with_optional()
            .with_default(NO_FLAG),
        FieldSpec::choice("cleared", "Cleared", cleared_options())
            .with_default(ClearedStatus::Uncleared.as_str()),
    ]
}

fn flag_color_options() -> Lookup {
    std::iter::once(NO_FLAG)
        .chain(FlagColor::ALL.iter().map(|color| color.as_str()))
        .map(|name| (name, name))
        .collect()
}

fn cleared_options() -> Lookup {
    ClearedStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.as_str()))
        .collect()
}

pub fn report(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Created { .. } => io::print_success("Transaction created successfully"),
        SubmitOutcome::Rejected { detail } => {
            io::print_error(format!("Failed to create transaction - {detail}"))
        }
    }
}
