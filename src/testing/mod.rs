mod fake_gitlab_client;
mod mock_clipboard;
mod scripted_console;

pub use fake_gitlab_client::FakeGitlabClient;
pub use mock_clipboard::{FakeCardBoard, MockClipboard};
pub use scripted_console::ScriptedConsole;
