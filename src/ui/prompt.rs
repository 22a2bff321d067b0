use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::error::Result;

/// Rows visible at once in the selection list.
const PAGE_SIZE: usize = 15;

/// Answers the two questions the interactive flow asks.
pub trait Prompter {
    /// Let the user tick any number of `items`; returns the chosen indices.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Ask a yes/no question. The default answer is no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// [`Prompter`] backed by dialoguer on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .max_length(PAGE_SIZE)
            .interact()?;
        Ok(chosen)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
