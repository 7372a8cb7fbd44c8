/// All slash commands supported by the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum SlashCommand {
    Analyze {
        url: String,
    },
    Readme {
        url: String,
    },
    Tests {
        url: String,
    },
    Version,
    Clear,
    Help {
        command: Option<String>,
    },
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "analyze",
        usage: "/analyze <github-url>",
        description: "Score the repository and print a summary with an improvement roadmap. Pasting a bare URL does the same.",
    },
    CommandHelp {
        name: "readme",
        usage: "/readme <github-url>",
        description: "Generate a professional README.md for the repository",
    },
    CommandHelp {
        name: "tests",
        usage: "/tests <github-url>",
        description: "Generate unit tests for the repository's main code",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the REPL",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/analyze",
    "/readme",
    "/tests",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Parse a raw input line into a SlashCommand, or return an error message.
/// A line that is not a slash command is treated as a URL to analyze.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty command".into());
    }
    if !input.starts_with('/') {
        if input.contains(char::is_whitespace) {
            return Err("Paste a single GitHub URL or type /help for available commands.".into());
        }
        return Ok(SlashCommand::Analyze { url: input.to_string() });
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let cmd = parts[0];
    let args = &parts[1..];

    match cmd {
        "/analyze" | "/a" => parse_url(cmd, args).map(|url| SlashCommand::Analyze { url }),
        "/readme" => parse_url(cmd, args).map(|url| SlashCommand::Readme { url }),
        "/tests" | "/test" => parse_url(cmd, args).map(|url| SlashCommand::Tests { url }),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

fn parse_url(cmd: &str, args: &[&str]) -> Result<String, String> {
    match args {
        [url] => Ok(url.to_string()),
        [] => Err(format!("Usage: {} <github-url>", cmd)),
        _ => Err(format!("{} takes exactly one URL", cmd)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_url_is_analysis() {
        let cmd = parse_command("https://github.com/octo/demo").unwrap();
        assert_eq!(cmd, SlashCommand::Analyze { url: "https://github.com/octo/demo".into() });
    }

    #[test]
    fn test_mode_commands() {
        assert_eq!(
            parse_command("/readme https://github.com/a/b").unwrap(),
            SlashCommand::Readme { url: "https://github.com/a/b".into() }
        );
        assert_eq!(
            parse_command("  /tests https://github.com/a/b ").unwrap(),
            SlashCommand::Tests { url: "https://github.com/a/b".into() }
        );
    }

    #[test]
    fn test_missing_url() {
        let err = parse_command("/analyze").unwrap_err();
        assert!(err.contains("Usage: /analyze"));
    }

    #[test]
    fn test_help_and_exit() {
        assert_eq!(parse_command("/help /readme").unwrap(), SlashCommand::Help { command: Some("readme".into()) });
        assert_eq!(parse_command("/quit").unwrap(), SlashCommand::Exit);
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_command("/scan").unwrap_err().starts_with("Unknown command"));
        assert!(parse_command("two words").is_err());
    }

    #[test]
    fn test_help_covers_every_command() {
        for name in COMMAND_NAMES {
            let bare = name.trim_start_matches('/');
            assert!(COMMAND_HELP.iter().any(|h| h.name == bare), "no help for {}", name);
        }
    }
}
