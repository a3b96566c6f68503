use dialoguer::{Confirm, MultiSelect};

use crate::domain::AppError;
use crate::ports::Console;

/// Terminal console driven by dialoguer prompts.
#[derive(Debug, Default)]
pub struct DialoguerConsole;

impl DialoguerConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for DialoguerConsole {
    fn notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn status(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        let selection = MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact_opt()
            .map_err(|err| AppError::PromptError(format!("Failed to select branches: {}", err)))?;
        Ok(selection.unwrap_or_default())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::PromptError(format!("Failed to read answer: {}", err)))?;
        Ok(answer.unwrap_or(false))
    }
}
