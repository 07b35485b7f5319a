use thiserror::Error;

/// One console line, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Help,
    Next,
    Previous,
    /// Row numbers are 1-based, as printed by `list`.
    Select(usize),
    Favorite(usize),
    Delete(usize),
    Clear { confirmed: bool },
    Undo,
    Private(bool),
    Search(String),
    Reload,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl ConsoleCommand {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Previous,
            "select" => Self::Select(row_number("select", rest)?),
            "fav" => Self::Favorite(row_number("fav", rest)?),
            "del" => Self::Delete(row_number("del", rest)?),
            "clear" => match rest {
                "" => Self::Clear { confirmed: false },
                "-y" => Self::Clear { confirmed: true },
                _ => {
                    return Err(CommandParseError::BadArgument {
                        command: "clear",
                        expected: "nothing or `-y`",
                    })
                }
            },
            "undo" => Self::Undo,
            "private" => match rest {
                "on" => Self::Private(true),
                "off" => Self::Private(false),
                _ => {
                    return Err(CommandParseError::BadArgument {
                        command: "private",
                        expected: "`on` or `off`",
                    })
                }
            },
            // An empty query shows everything again.
            "search" => Self::Search(rest.to_string()),
            "reload" => Self::Reload,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn row_number(command: &'static str, arg: &str) -> Result<usize, CommandParseError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandParseError::BadArgument {
            command,
            expected: "a row number from `list`",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(ConsoleCommand::parse("list"), Ok(Some(ConsoleCommand::List)));
        assert_eq!(ConsoleCommand::parse("  next "), Ok(Some(ConsoleCommand::Next)));
        assert_eq!(ConsoleCommand::parse("prev"), Ok(Some(ConsoleCommand::Previous)));
        assert_eq!(ConsoleCommand::parse("quit"), Ok(Some(ConsoleCommand::Quit)));
        assert_eq!(ConsoleCommand::parse(""), Ok(None));
    }

    #[test]
    fn parses_row_numbers() {
        assert_eq!(ConsoleCommand::parse("select 2"), Ok(Some(ConsoleCommand::Select(2))));
        assert_eq!(ConsoleCommand::parse("fav 1"), Ok(Some(ConsoleCommand::Favorite(1))));
        assert!(matches!(
            ConsoleCommand::parse("del 0"),
            Err(CommandParseError::BadArgument { command: "del", .. })
        ));
        assert!(ConsoleCommand::parse("select x").is_err());
    }

    #[test]
    fn clear_needs_explicit_confirmation_flag() {
        assert_eq!(
            ConsoleCommand::parse("clear"),
            Ok(Some(ConsoleCommand::Clear { confirmed: false }))
        );
        assert_eq!(
            ConsoleCommand::parse("clear -y"),
            Ok(Some(ConsoleCommand::Clear { confirmed: true }))
        );
        assert!(ConsoleCommand::parse("clear now").is_err());
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            ConsoleCommand::parse("search  hello world "),
            Ok(Some(ConsoleCommand::Search("hello world".to_string())))
        );
        assert_eq!(
            ConsoleCommand::parse("search"),
            Ok(Some(ConsoleCommand::Search(String::new())))
        );
    }

    #[test]
    fn private_toggle_and_unknown_words() {
        assert_eq!(ConsoleCommand::parse("private on"), Ok(Some(ConsoleCommand::Private(true))));
        assert!(ConsoleCommand::parse("private maybe").is_err());
        assert_eq!(
            ConsoleCommand::parse("frobnicate"),
            Err(CommandParseError::Unknown("frobnicate".to_string()))
        );
    }
}
