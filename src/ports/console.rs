use crate::domain::AppError;

/// Operator-facing surface of the interactive removal workflow.
pub trait Console {
    /// Print an informational line.
    fn notice(&mut self, message: &str);

    /// Progress, warnings and fetch failures. Kept off the report stream.
    fn status(&mut self, message: &str);

    /// Let the operator pick any number of `items`. Returns the chosen indices;
    /// an aborted prompt yields an empty list.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>, AppError>;

    /// Yes/no question. An aborted prompt counts as "no".
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError>;
}
