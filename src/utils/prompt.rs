use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// One question at a time, answers read before the next question is asked.
///
/// A cancelled or interrupted prompt yields a falsy/empty answer instead of
/// an error, so callers never have to special-case Esc or Ctrl-C.
pub trait Prompter {
    fn confirm(&self, message: &str) -> Result<bool>;
    fn select(&self, message: &str, items: &[&str]) -> Result<usize>;
    fn input(&self, message: &str) -> Result<String>;
}

pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn select(&self, message: &str, items: &[&str]) -> Result<usize> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice.unwrap_or(0))
    }

    fn input(&self, message: &str) -> Result<String> {
        let text = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default();
        Ok(text)
    }
}
