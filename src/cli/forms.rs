//! Sequential form runner used by interactive commands.
//!
//! A form is an ordered list of [`FieldSpec`]s. The runner asks each field in
//! turn through a [`Prompter`], never revisits a field, and collects the
//! answers into [`FormAnswers`]. Choice and search fields answer with the
//! chosen entry's ID rather than its label.

use thiserror::Error;

use crate::cli::ui::prompts::Prompter;
use crate::reference::Lookup;

/// Extra entry appended to search suggestions to start a new query.
pub const SEARCH_AGAIN: &str = "↺ Search again";

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("No options available for `{0}`")]
    NoOptions(&'static str),
    #[error("Scripted inputs exhausted before prompt `{0}`")]
    ScriptExhausted(String),
    #[error("`{answer}` is not an option for `{prompt}`")]
    UnknownOption { prompt: String, answer: String },
}

/// Where a field's acceptable answers come from.
#[derive(Debug, Clone)]
pub enum OptionsProvider {
    /// Any text.
    FreeText,
    /// Pick one entry of a fixed list, preselecting `default` (an ID).
    Choices {
        options: Lookup,
        default: Option<String>,
    },
    /// Type a query, then pick one of the entries whose label contains it.
    Search(Lookup),
}

/// Declarative description of a single form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    pub required: bool,
    pub options: OptionsProvider,
}

impl FieldSpec {
    pub fn text(id: &'static str, prompt: &'static str) -> Self {
        Self {
            id,
            prompt,
            required: true,
            options: OptionsProvider::FreeText,
        }
    }

    pub fn choice(id: &'static str, prompt: &'static str, options: Lookup) -> Self {
        Self {
            id,
            prompt,
            required: true,
            options: OptionsProvider::Choices {
                options,
                default: None,
            },
        }
    }

    pub fn search(id: &'static str, prompt: &'static str, options: Lookup) -> Self {
        Self {
            id,
            prompt,
            required: true,
            options: OptionsProvider::Search(options),
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Preselects the entry with ID `default`. Ignored for non-choice fields.
    pub fn with_default(mut self, default: &str) -> Self {
        if let OptionsProvider::Choices {
            default: ref mut slot,
            ..
        } = self.options
        {
            *slot = Some(default.to_string());
        }
        self
    }
}

/// Answers keyed by field ID, in the order the fields were asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormAnswers {
    values: Vec<(&'static str, String)>,
}

impl FormAnswers {
    pub fn insert(&mut self, id: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = value,
            None => self.values.push((id, value)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }
}

impl<const N: usize> From<[(&'static str, &str); N]> for FormAnswers {
    fn from(pairs: [(&'static str, &str); N]) -> Self {
        let mut answers = FormAnswers::default();
        for (id, value) in pairs {
            answers.insert(id, value);
        }
        answers
    }
}

/// Asks every field in order and returns the collected answers.
pub fn run_form(
    fields: &[FieldSpec],
    prompter: &mut dyn Prompter,
) -> Result<FormAnswers, FormError> {
    let mut answers = FormAnswers::default();
    for field in fields {
        let answer = ask(field, prompter)?;
        tracing::debug!(field = field.id, "form field answered");
        answers.insert(field.id, answer);
    }
    Ok(answers)
}

fn ask(field: &FieldSpec, prompter: &mut dyn Prompter) -> Result<String, FormError> {
    match &field.options {
        OptionsProvider::FreeText => prompter.text(field.prompt, field.required),
        OptionsProvider::Choices { options, default } => {
            if options.is_empty() {
                return Err(FormError::NoOptions(field.id));
            }
            let labels: Vec<&str> = options.labels().collect();
            let default_index = default
                .as_deref()
                .and_then(|wanted| options.ids().position(|id| id == wanted))
                .unwrap_or(0);
            let index = prompter.select(field.prompt, &labels, default_index)?;
            options
                .ids()
                .nth(index)
                .map(str::to_string)
                .ok_or_else(|| FormError::UnknownOption {
                    prompt: field.prompt.to_string(),
                    answer: index.to_string(),
                })
        }
        OptionsProvider::Search(options) => search(field, options, prompter),
    }
}

fn search(
    field: &FieldSpec,
    options: &Lookup,
    prompter: &mut dyn Prompter,
) -> Result<String, FormError> {
    if options.is_empty() {
        return Err(FormError::NoOptions(field.id));
    }
    let query_prompt = format!("{} (type to search)", field.prompt);

    loop {
        let query = prompter.text(&query_prompt, false)?;
        let suggestions = options.search(&query);
        if suggestions.is_empty() {
            if query.is_empty() {
                prompter.warn("Type part of a name to search.");
            } else {
                prompter.warn(&format!("Nothing matches `{query}`."));
            }
            continue;
        }

        let mut labels: Vec<&str> = suggestions.labels().collect();
        labels.push(SEARCH_AGAIN);
        let index = prompter.select(field.prompt, &labels, 0)?;
        let picked = suggestions.ids().nth(index).map(str::to_string);
        if let Some(id) = picked {
            return Ok(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ui::test_mode::ScriptedPrompter;

    fn lookup(pairs: &[(&str, &str)]) -> Lookup {
        pairs.iter().copied().collect()
    }

    #[test]
    fn fields_are_answered_in_order() {
        let fields = vec![
            FieldSpec::text("amount", "Amount"),
            FieldSpec::choice(
                "account",
                "Account",
                lookup(&[("a1", "Checking"), ("a2", "Savings")]),
            ),
            FieldSpec::text("memo", "Memo (optional)").with_optional(),
        ];
        let mut prompter = ScriptedPrompter::new(["12.5", "savings", "<BLANK>"]);

        let answers = run_form(&fields, &mut prompter).unwrap();

        let collected: Vec<(&str, &str)> = answers.iter().collect();
        assert_eq!(
            collected,
            vec![("amount", "12.5"), ("account", "a2"), ("memo", "")]
        );
    }

    #[test]
    fn required_text_skips_blank_answers() {
        let fields = vec![FieldSpec::text("amount", "Amount")];
        let mut prompter = ScriptedPrompter::new(["<BLANK>", "7"]);

        let answers = run_form(&fields, &mut prompter).unwrap();
        assert_eq!(answers.get("amount"), Some("7"));
    }

    #[test]
    fn choice_uses_default_when_requested() {
        let options = lookup(&[("cleared", "cleared"), ("uncleared", "uncleared")]);
        let fields =
            vec![FieldSpec::choice("cleared", "Cleared", options).with_default("uncleared")];
        let mut prompter = ScriptedPrompter::new(["<DEFAULT>"]);

        let answers = run_form(&fields, &mut prompter).unwrap();
        assert_eq!(answers.get("cleared"), Some("uncleared"));
    }

    #[test]
    fn search_retries_until_a_suggestion_is_chosen() {
        let payees = lookup(&[
            ("p1", "Grocery Outlet"),
            ("p2", "Gas Station"),
            ("p3", "Fancy Grocer"),
        ]);
        let fields = vec![FieldSpec::search("payee", "Payee", payees)];
        // Empty query, no match, then "gro" followed by "Search again",
        // then "fancy" picking its only hit.
        let mut prompter = ScriptedPrompter::new([
            "<BLANK>",
            "xyz",
            "gro",
            SEARCH_AGAIN,
            "fancy",
            "Fancy Grocer",
        ]);

        let answers = run_form(&fields, &mut prompter).unwrap();
        assert_eq!(answers.get("payee"), Some("p3"));
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn search_picks_second_of_same_named_suggestions() {
        let payees = lookup(&[("p1", "Costco"), ("p2", "Costco"), ("p3", "Target")]);
        let fields = vec![FieldSpec::search("payee", "Payee", payees)];
        let mut prompter = ScriptedPrompter::new(["cost", "2"]);

        let answers = run_form(&fields, &mut prompter).unwrap();
        assert_eq!(answers.get("payee"), Some("p2"));
    }

    #[test]
    fn empty_choice_list_is_an_error() {
        let fields = vec![FieldSpec::choice("account", "Account", Lookup::new())];
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let err = run_form(&fields, &mut prompter).unwrap_err();
        assert!(matches!(err, FormError::NoOptions("account")));
    }

    #[test]
    fn running_out_of_script_aborts() {
        let fields = vec![
            FieldSpec::text("amount", "Amount"),
            FieldSpec::text("memo", "Memo"),
        ];
        let mut prompter = ScriptedPrompter::new(["5"]);

        let err = run_form(&fields, &mut prompter).unwrap_err();
        assert!(matches!(err, FormError::ScriptExhausted(ref prompt) if prompt == "Memo"));
    }

    #[test]
    fn later_insert_overwrites_answer() {
        let mut answers = FormAnswers::from([("memo", "first")]);
        answers.insert("memo", "second");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("memo"), Some("second"));
    }
}
