//! Browser commands parsed from input lines

use stackfeed_domain::QuestionId;

/// One user action in the interactive browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Re-run the active screen's fetch
    Refresh,
    /// Open a question by list position, or by id when out of range
    Open(u64),
    /// Open a question by id (`#123`)
    OpenId(QuestionId),
    /// Close the details screen
    Back,
    Help,
    Quit,
    /// Ctrl-C: tear down the active screen
    Interrupt,
    Unknown(String),
}

impl BrowseCommand {
    /// Parse one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "r" | "refresh" => Self::Refresh,
            "b" | "back" => Self::Back,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                if let Some(id) = line.strip_prefix('#') {
                    match QuestionId::try_new(id) {
                        Some(id) => Self::OpenId(id),
                        None => Self::Unknown(line.to_string()),
                    }
                } else if let Ok(n) = line.parse::<u64>() {
                    Self::Open(n)
                } else {
                    Self::Unknown(line.to_string())
                }
            }
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  r, refresh   re-run the current screen's fetch
  <n>          open question number <n> from the list (or id <n> if out of range)
  #<id>        open question by id
  b, back      close the question and return to the list
  q, quit      exit
  Ctrl-C       cancel the current fetch (quits when nothing is in flight)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(BrowseCommand::parse("r"), Some(BrowseCommand::Refresh));
        assert_eq!(BrowseCommand::parse(" Refresh "), Some(BrowseCommand::Refresh));
        assert_eq!(BrowseCommand::parse("b"), Some(BrowseCommand::Back));
        assert_eq!(BrowseCommand::parse("?"), Some(BrowseCommand::Help));
        assert_eq!(BrowseCommand::parse("Q"), Some(BrowseCommand::Quit));
    }

    #[test]
    fn test_parse_numbers_and_ids() {
        assert_eq!(BrowseCommand::parse("3"), Some(BrowseCommand::Open(3)));
        assert_eq!(
            BrowseCommand::parse("#11227809"),
            Some(BrowseCommand::OpenId(QuestionId::from(11227809)))
        );
        assert_eq!(
            BrowseCommand::parse("#"),
            Some(BrowseCommand::Unknown("#".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(BrowseCommand::parse("   "), None);
        assert_eq!(
            BrowseCommand::parse("open"),
            Some(BrowseCommand::Unknown("open".to_string()))
        );
    }
}
