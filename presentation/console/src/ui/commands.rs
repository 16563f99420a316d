/// A line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `scan` prompts the scanner; `scan <code>` uses the given code directly.
    Scan(Option<String>),
    Create,
    Retry,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list of commands.")]
    Unknown(String),
    #[error("Empty command")]
    Empty,
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "scan" | "s" if rest.is_empty() => Ok(Command::Scan(None)),
            "scan" | "s" => Ok(Command::Scan(Some(rest.to_string()))),
            "create" | "c" => Ok(Command::Create),
            "retry" | "r" => Ok(Command::Retry),
            "reset" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "Commands:
  scan [code]  scan a QR code (or enter the code directly)
  create       create a placeholder product for a missing code
  retry        repeat the call that failed
  reset        start over
  quit         leave the application";
