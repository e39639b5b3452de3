//! Command parser for the : command system

use std::path::PathBuf;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a tab by name; the name is passed through untouched
    Tab(String),

    Export(Option<PathBuf>),
    Copy,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "tab" | "t" => match args {
            Some(name) => Command::Tab(name),
            None => Command::Unknown(input.to_string()),
        },
        "overview" | "ov" => Command::Tab("overview".to_string()),
        "trims" | "trim" => Command::Tab("trims".to_string()),
        "cargo" => Command::Tab("cargo space".to_string()),
        "ratings" | "rating" => Command::Tab("ratings".to_string()),

        // Output
        "export" | "exp" => Command::Export(args.map(PathBuf::from)),
        "copy" | "yank" | "y" => Command::Copy,

        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_commands() {
        assert_eq!(parse_command("trims"), Command::Tab("trims".to_string()));
        assert_eq!(
            parse_command("cargo"),
            Command::Tab("cargo space".to_string())
        );
        assert_eq!(
            parse_command("tab Cargo Space"),
            Command::Tab("Cargo Space".to_string())
        );
        assert_eq!(parse_command("TAB ratings"), Command::Tab("ratings".to_string()));
        assert_eq!(parse_command("tab"), Command::Unknown("tab".to_string()));
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(parse_command("export"), Command::Export(None));
        assert_eq!(
            parse_command("export /tmp/out"),
            Command::Export(Some(PathBuf::from("/tmp/out")))
        );
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command(" q "), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("yank"), Command::Copy);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
