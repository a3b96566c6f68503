mod console;
mod gitlab_client;
mod report_sink;

pub use console::Console;
pub use gitlab_client::GitlabClient;
pub use report_sink::{CardBoard, ClipboardWriter};
