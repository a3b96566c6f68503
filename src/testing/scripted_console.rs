use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console that replays prepared answers and records everything shown.
#[derive(Default)]
pub struct ScriptedConsole {
    selections: VecDeque<Vec<usize>>,
    confirmations: VecDeque<bool>,
    pub notices: Vec<String>,
    pub statuses: Vec<String>,
    pub prompts: Vec<(String, Vec<String>)>,
    pub confirm_prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the indices returned by the next `multi_select`.
    pub fn select(mut self, indices: Vec<usize>) -> Self {
        self.selections.push_back(indices);
        self
    }

    pub fn answer(mut self, yes: bool) -> Self {
        self.confirmations.push_back(yes);
        self
    }

    pub fn output(&self) -> String {
        self.notices.join("\n")
    }

    pub fn status_output(&self) -> String {
        self.statuses.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        self.prompts.push((prompt.to_string(), items.to_vec()));
        self.selections
            .pop_front()
            .ok_or_else(|| AppError::PromptError(format!("unexpected prompt: {prompt}")))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        self.confirm_prompts.push(prompt.to_string());
        self.confirmations
            .pop_front()
            .ok_or_else(|| AppError::PromptError(format!("unexpected confirmation: {prompt}")))
    }
}
