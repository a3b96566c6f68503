mod clipboard_arboard;
mod console_dialoguer;
mod gitlab_client_http;
mod trello_board_http;

pub use clipboard_arboard::ArboardClipboard;
pub use console_dialoguer::DialoguerConsole;
pub use gitlab_client_http::HttpGitlabClient;
pub use trello_board_http::HttpTrelloBoard;
