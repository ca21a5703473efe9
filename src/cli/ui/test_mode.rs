//! Scripted answers for driving the form without a terminal.
//!
//! When `YNAB_TEST_INPUTS` is set the binary replays its `|`-separated
//! answers instead of prompting. Tokens:
//!
//! * `<BLANK>` / `<EMPTY>`: empty text
//! * `<DEFAULT>`: the preselected option of a select prompt
//! * anything else: text as-is, or for select prompts the option whose label
//!   matches ignoring case (a 1-based number also works)
//!
//! Label matching takes the first option with that label, so when two
//! entries share a name (two payees called "Costco", say) the later one can
//! only be chosen by its number.

use std::{collections::VecDeque, env};

use crate::cli::forms::FormError;
use crate::cli::ui::prompts::Prompter;

pub const TEST_INPUTS_VAR: &str = "YNAB_TEST_INPUTS";

const BLANK_TOKENS: [&str; 2] = ["<BLANK>", "<EMPTY>"];
const DEFAULT_TOKEN: &str = "<DEFAULT>";

#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a prompter from `YNAB_TEST_INPUTS`, if set.
    pub fn from_env() -> Option<Self> {
        env::var(TEST_INPUTS_VAR).ok().map(|raw| Self::parse(&raw))
    }

    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.split('|')
                .map(str::trim)
                .filter(|segment| !segment.is_empty()),
        )
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String, FormError> {
        let raw = self
            .inputs
            .pop_front()
            .ok_or_else(|| FormError::ScriptExhausted(prompt.to_string()))?;
        tracing::debug!(prompt, answer = %raw, "scripted answer");
        if BLANK_TOKENS.contains(&raw.as_str()) {
            Ok(String::new())
        } else {
            Ok(raw)
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, required: bool) -> Result<String, FormError> {
        loop {
            let value = self.next(prompt)?;
            if required && value.trim().is_empty() {
                continue;
            }
            return Ok(value);
        }
    }

    fn select(
        &mut self,
        prompt: &str,
        labels: &[&str],
        default: usize,
    ) -> Result<usize, FormError> {
        let answer = self.next(prompt)?;
        if answer == DEFAULT_TOKEN {
            return Ok(default);
        }
        let wanted = answer.trim();
        labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(wanted))
            .or_else(|| {
                wanted
                    .parse::<usize>()
                    .ok()
                    .filter(|number| (1..=labels.len()).contains(number))
                    .map(|number| number - 1)
            })
            .ok_or_else(|| FormError::UnknownOption {
                prompt: prompt.to_string(),
                answer,
            })
    }
}
