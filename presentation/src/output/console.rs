//! Console formatting for question lists and details

use crate::output::html::{decode_inline, html_to_text};
use colored::Colorize;
use stackfeed_domain::Question;

/// Formats screen content for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered list of question titles; the numbers are what `browse`
    /// accepts to open a question.
    pub fn format_list(questions: &[Question]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Latest questions"));
        output.push('\n');

        if questions.is_empty() {
            output.push_str(&format!("{}\n", "No questions.".dimmed()));
            return output;
        }

        let width = questions.len().to_string().len();
        for (index, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "{:>width$}. {} {}\n",
                index + 1,
                decode_inline(&question.title).bold(),
                format!("#{}", question.id).dimmed(),
                width = width,
            ));
        }
        output
    }

    /// Question body rendered from HTML to plain text.
    pub fn format_detail(body: &str) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Question"));
        output.push('\n');
        output.push_str(&html_to_text(body));
        output.push('\n');
        output
    }

    pub fn format_fetch_error() -> String {
        format!(
            "{} {}",
            "Server error:".red().bold(),
            "could not load questions. Try again later."
        )
    }

    pub fn format_notice(message: &str) -> String {
        format!("{} {}", "->".cyan(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfeed_domain::QuestionId;

    fn question(id: u64, title: &str) -> Question {
        Question::new(QuestionId::from(id), title)
    }

    #[test]
    fn test_format_list_numbers_in_order() {
        let output = ConsoleFormatter::format_list(&[
            question(11, "First"),
            question(22, "Second"),
        ]);
        let first = output.find("First").unwrap();
        let second = output.find("Second").unwrap();
        assert!(first < second);
        assert!(output.contains("1. "));
        assert!(output.contains("2. "));
        assert!(output.contains("#22"));
    }

    #[test]
    fn test_format_list_decodes_titles() {
        let output = ConsoleFormatter::format_list(&[question(1, "Isn&#39;t it &lt;T&gt;?")]);
        assert!(output.contains("Isn't it <T>?"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = ConsoleFormatter::format_list(&[]);
        assert!(output.contains("No questions."));
    }

    #[test]
    fn test_format_detail_strips_html() {
        let output = ConsoleFormatter::format_detail("<p>Hello <code>world</code></p>");
        assert!(output.contains("Hello world"));
        assert!(!output.contains("<p>"));
    }

    #[test]
    fn test_format_fetch_error() {
        assert!(ConsoleFormatter::format_fetch_error().contains("could not load questions"));
    }
}
