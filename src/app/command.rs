//! Command parsing for the command line

use std::path::PathBuf;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Open a chapter, module or homework by id: :goto <id>
    Goto(String),
    /// Return to the dashboard: :dashboard or :home
    Dashboard,
    /// Clear all progress: :reset
    Reset,
    /// Attach a file to the homework draft: :attach <path>
    Attach(PathBuf),
    /// Remove an attachment by its 1-based position: :detach <n>
    Detach(usize),
    /// Submit the homework draft: :submit
    Submit,
    /// Mark the open module complete: :complete
    Complete,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Ok(Command),
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument given but not usable
    InvalidArgument { command: String, argument: String },
}

fn require<'a>(name: &str, args: &'a str) -> Result<&'a str, ParseResult> {
    if args.is_empty() { Err(ParseResult::MissingArgument(name.to_string())) } else { Ok(args) }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(str::trim).unwrap_or("");

    let parsed = match cmd.to_lowercase().as_str() {
        "quit" | "q" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        "dashboard" | "home" => Ok(Command::Dashboard),
        "reset" => Ok(Command::Reset),
        "submit" => Ok(Command::Submit),
        "complete" | "done" => Ok(Command::Complete),
        "goto" | "g" => require("goto", args).map(|id| Command::Goto(id.to_string())),
        "attach" | "a" => require("attach", args).map(|p| Command::Attach(PathBuf::from(p))),
        "detach" => require("detach", args).and_then(|n| match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Command::Detach(n)),
            _ => Err(ParseResult::InvalidArgument {
                command: "detach".to_string(),
                argument: n.to_string(),
            }),
        }),
        _ => Err(ParseResult::UnknownCommand(cmd.to_string())),
    };

    match parsed {
        Ok(command) => ParseResult::Ok(command),
        Err(result) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("quit"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("Q"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_help_command() {
        assert!(matches!(parse_command("help"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("h"), ParseResult::Ok(Command::Help)));
        assert!(matches!(parse_command("?"), ParseResult::Ok(Command::Help)));
    }

    #[test]
    fn parse_goto_command() {
        assert_eq!(parse_command("goto mod-3-2"), ParseResult::Ok(Command::Goto("mod-3-2".into())));
        assert_eq!(parse_command("g  hw-1-1 "), ParseResult::Ok(Command::Goto("hw-1-1".into())));
        assert!(matches!(parse_command("goto"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_attach_keeps_spaces_in_path() {
        match parse_command("attach /home/me/My Returns/w2.pdf") {
            ParseResult::Ok(Command::Attach(path)) => {
                assert_eq!(path, PathBuf::from("/home/me/My Returns/w2.pdf"));
            }
            other => panic!("Expected Attach command, got {:?}", other),
        }
        assert!(matches!(parse_command("attach"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_detach_needs_positive_number() {
        assert_eq!(parse_command("detach 2"), ParseResult::Ok(Command::Detach(2)));
        assert!(matches!(parse_command("detach 0"), ParseResult::InvalidArgument { .. }));
        assert!(matches!(parse_command("detach two"), ParseResult::InvalidArgument { .. }));
    }

    #[test]
    fn parse_course_commands() {
        assert_eq!(parse_command("reset"), ParseResult::Ok(Command::Reset));
        assert_eq!(parse_command("home"), ParseResult::Ok(Command::Dashboard));
        assert_eq!(parse_command("submit"), ParseResult::Ok(Command::Submit));
        assert_eq!(parse_command("done"), ParseResult::Ok(Command::Complete));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(parse_command("unknown"), ParseResult::UnknownCommand("unknown".into()));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }
}
