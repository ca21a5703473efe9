use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::forms::FormError;
use crate::cli::io;

/// Number of options shown at once before a select list starts paging.
const SELECT_PAGE_SIZE: usize = 15;

/// Source of answers for the form runner.
pub trait Prompter {
    /// Free text. A `required` prompt never yields an empty answer.
    fn text(&mut self, prompt: &str, required: bool) -> Result<String, FormError>;

    /// Index into `labels` of the chosen option.
    fn select(&mut self, prompt: &str, labels: &[&str], default: usize)
        -> Result<usize, FormError>;

    fn warn(&mut self, message: &str) {
        io::print_warning(message);
    }
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, required: bool) -> Result<String, FormError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(!required)
            .interact_text()
            .map_err(FormError::from)
    }

    fn select(
        &mut self,
        prompt: &str,
        labels: &[&str],
        default: usize,
    ) -> Result<usize, FormError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(labels)
            .default(default)
            .max_length(SELECT_PAGE_SIZE)
            .interact()
            .map_err(FormError::from)
    }
}
