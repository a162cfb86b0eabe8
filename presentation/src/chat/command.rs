//! Commands recognised at the `[You]:` prompt

/// A REPL command; anything else typed at the prompt goes to the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    /// Show the current problem again
    Problem,
    /// Switch problems, optionally with the query already given
    New(Option<String>),
    /// Restart the conversation on the same problem
    Reset,
    History,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a trimmed input line. `None` means the line is a message.
    pub fn parse(line: &str) -> Option<Self> {
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return Some(ReplCommand::Exit);
        }
        if !line.starts_with('/') {
            return None;
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Exit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/problem" | "/p" => ReplCommand::Problem,
            "/new" | "/n" => {
                ReplCommand::New((!rest.is_empty()).then(|| rest.to_string()))
            }
            "/reset" => ReplCommand::Reset,
            "/history" => ReplCommand::History,
            _ => ReplCommand::Unknown(name.to_string()),
        };
        Some(command)
    }
}
