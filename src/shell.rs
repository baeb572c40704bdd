//! Line-oriented command dispatcher.
//!
//! Wires text input to store commands, one command per line:
//!
//! ```text
//! page 2        switch to page 2 (0-based), clearing the search
//! search berry  filter the current page (rest of line, verbatim)
//! search        clear the filter (same as `clear`)
//! stats         print statistics for the visible items
//! show          print the current view
//! help          list commands
//! quit          stop reading
//! ```

use crate::model::AppError;
use crate::report::{self, OutputFormat};
use crate::state::{Command, ViewStateStore};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  page N       switch to page N (0-based), clearing the search
  search TEXT  filter the current page by TEXT
  clear        clear the search filter
  stats        show letter statistics for the visible items
  show         show the current view
  help         show this help
  quit         exit
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A command for the store.
    Store(Command),
    /// Print statistics.
    Stats,
    /// Print the view.
    Show,
    /// Print the command list.
    Help,
    /// Stop the loop.
    Quit,
    /// Blank line.
    Empty,
}

/// Errors parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// The first word is not a known command.
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    /// `page` without a numeric argument.
    #[error("Expected a page number, got {0:?}")]
    InvalidPageNumber(String),

    /// `page` with an integer too large to address any page.
    #[error("Page index {0} out of range")]
    PageOutOfRange(String),
}

/// Parse one input line.
///
/// # Errors
///
/// Returns [`ShellError`] for unknown commands, a non-numeric page, or a
/// page number too large to represent.
pub fn parse_line(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "" => Ok(ShellCommand::Empty),
        "page" | "p" => parse_page(rest.trim())
            .map(|index| ShellCommand::Store(Command::SetCurrentPage(index))),
        "search" | "s" => Ok(ShellCommand::Store(Command::SetSearchQuery(
            rest.to_string(),
        ))),
        "clear" => Ok(ShellCommand::Store(Command::SetSearchQuery(String::new()))),
        "stats" => Ok(ShellCommand::Stats),
        "show" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(ShellError::UnknownCommand(other.to_string())),
    }
}

/// Parse a page argument; integers beyond `i128` are out of range, not
/// malformed.
fn parse_page(arg: &str) -> Result<i128, ShellError> {
    arg.parse::<i128>().map_err(|_| {
        let digits = arg.strip_prefix(['-', '+']).unwrap_or(arg);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            ShellError::PageOutOfRange(arg.to_string())
        } else {
            ShellError::InvalidPageNumber(arg.to_string())
        }
    })
}

/// Read commands from `input` until EOF or `quit`, writing to `output`.
///
/// Parse errors and rejected commands are reported on `output` and the
/// loop continues; the store is unchanged by a rejected command.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    store: &mut ViewStateStore,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<(), AppError> {
    for line in input.lines() {
        let line = line?;
        debug!(line = %line, "Shell input");

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {}", err)?;
                continue;
            }
        };

        match command {
            ShellCommand::Store(command) => match store.dispatch(command) {
                Ok(view) => writeln!(output, "{}", report::render(view, None, format)?)?,
                Err(err) => writeln!(output, "error: {}", err)?,
            },
            ShellCommand::Stats => {
                let stats = store.statistics();
                let rendered = match format {
                    OutputFormat::Text => report::render_statistics_text(&stats),
                    OutputFormat::Json => serde_json::to_string(&stats)?,
                };
                writeln!(output, "{}", rendered)?;
            }
            ShellCommand::Show => {
                writeln!(output, "{}", report::render(store.state(), None, format)?)?
            }
            ShellCommand::Help => write!(output, "{}", HELP)?,
            ShellCommand::Quit => break,
            ShellCommand::Empty => {}
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageCatalog;

    fn run_script(script: &str) -> (ViewStateStore, String) {
        let mut store = ViewStateStore::new(PageCatalog::sample());
        let mut output = Vec::new();
        run(&mut store, script.as_bytes(), &mut output, OutputFormat::Text)
            .expect("in-memory I/O");
        (store, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn parse_page_command() {
        assert_eq!(
            parse_line("page 3"),
            Ok(ShellCommand::Store(Command::SetCurrentPage(3)))
        );
        assert_eq!(
            parse_line("p -1"),
            Ok(ShellCommand::Store(Command::SetCurrentPage(-1)))
        );
    }

    #[test]
    fn parse_page_without_number_is_error() {
        assert_eq!(
            parse_line("page two"),
            Err(ShellError::InvalidPageNumber("two".to_string()))
        );
        assert_eq!(
            parse_line("page"),
            Err(ShellError::InvalidPageNumber(String::new()))
        );
    }

    #[test]
    fn parse_page_overflowing_number_is_out_of_range() {
        assert_eq!(
            parse_line("page 99999999999999999999"),
            Ok(ShellCommand::Store(Command::SetCurrentPage(
                99_999_999_999_999_999_999
            )))
        );

        let huge = "9".repeat(50);
        assert_eq!(
            parse_line(&format!("page -{}", huge)),
            Err(ShellError::PageOutOfRange(format!("-{}", huge)))
        );
    }

    #[test]
    fn parse_splits_command_on_any_whitespace() {
        assert_eq!(
            parse_line("search\tberry"),
            Ok(ShellCommand::Store(Command::SetSearchQuery(
                "berry".to_string()
            )))
        );
        assert_eq!(
            parse_line("page\t2"),
            Ok(ShellCommand::Store(Command::SetCurrentPage(2)))
        );
    }

    #[test]
    fn parse_search_keeps_rest_of_line_verbatim() {
        assert_eq!(
            parse_line("search  ugli fruit "),
            Ok(ShellCommand::Store(Command::SetSearchQuery(
                " ugli fruit ".to_string()
            )))
        );
        assert_eq!(
            parse_line("search"),
            Ok(ShellCommand::Store(Command::SetSearchQuery(String::new())))
        );
    }

    #[test]
    fn parse_misc_commands() {
        assert_eq!(parse_line(""), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("   "), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("stats"), Ok(ShellCommand::Stats));
        assert_eq!(parse_line("show\r\n"), Ok(ShellCommand::Show));
        assert_eq!(parse_line("quit"), Ok(ShellCommand::Quit));
        assert_eq!(
            parse_line("dance"),
            Err(ShellError::UnknownCommand("dance".to_string()))
        );
    }

    #[test]
    fn run_applies_commands_in_order() {
        let (store, _) = run_script("page 2\nsearch an\n");

        assert_eq!(store.state().current_page(), 2);
        assert_eq!(store.state().search_query(), "an");
        let titles: Vec<&str> = store
            .state()
            .visible_items()
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["mango", "nectarine", "orange", "cantaloupe"]);
    }

    #[test]
    fn run_reports_rejected_page_and_continues() {
        let (store, output) = run_script("search a\npage 7\nstats\n");

        assert!(output.contains("error: Page index 7 out of range"), "got: {}", output);
        assert!(output.contains("Statistics for page 1"), "got: {}", output);
        assert_eq!(store.state().search_query(), "a");
    }

    #[test]
    fn run_reports_huge_page_as_out_of_range() {
        let (store, output) = run_script("page 1\npage 99999999999999999999\n");

        assert!(
            output.contains("error: Page index 99999999999999999999 out of range"),
            "got: {}",
            output
        );
        assert_eq!(store.state().current_page(), 1);
    }

    #[test]
    fn run_stops_at_quit() {
        let (store, _) = run_script("page 1\nquit\npage 3\n");

        assert_eq!(store.state().current_page(), 1);
    }

    #[test]
    fn run_reports_unknown_commands() {
        let (_, output) = run_script("jump 3\n");

        assert!(output.starts_with("error: Unknown command: jump"), "got: {}", output);
    }
}
