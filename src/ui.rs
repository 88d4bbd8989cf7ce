// UI layer: status line styling and the progress spinner.
// Color and spinner are only used when stdout is a terminal, so piped
// output and tests see plain text.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};

/// How status lines are rendered. Each stream is styled only when it is
/// attached to a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    stdout_colored: bool,
    stderr_colored: bool,
}

impl Console {
    pub fn detect() -> Self {
        Console {
            stdout_colored: io::stdout().is_tty(),
            stderr_colored: io::stderr().is_tty(),
        }
    }

    /// Never style output.
    pub fn plain() -> Self {
        Console {
            stdout_colored: false,
            stderr_colored: false,
        }
    }

    pub fn notice(&self, out: &mut impl Write, msg: impl Display) -> io::Result<()> {
        writeln!(out, "{msg}")
    }

    pub fn success(&self, out: &mut impl Write, msg: impl Display) -> io::Result<()> {
        if self.stdout_colored {
            writeln!(out, "{}", msg.to_string().green())
        } else {
            writeln!(out, "{msg}")
        }
    }

    pub fn error(&self, err: &mut impl Write, msg: impl Display) -> io::Result<()> {
        if self.stderr_colored {
            writeln!(err, "{}", msg.to_string().red())
        } else {
            writeln!(err, "{msg}")
        }
    }

    /// Spinner shown while the request is in flight. indicatif draws on
    /// stderr, so it is hidden unless stderr is a terminal.
    pub fn spinner(&self, msg: &'static str) -> ProgressBar {
        if !self.stderr_colored {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(msg);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_writes_unstyled_lines() {
        let console = Console::plain();
        let mut buf = Vec::new();
        console.success(&mut buf, "done").unwrap();
        console.error(&mut buf, "oops").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "done\noops\n");
    }

    #[test]
    fn colored_console_keeps_message_text() {
        let console = Console {
            stdout_colored: true,
            stderr_colored: true,
        };
        let mut buf = Vec::new();
        console.error(&mut buf, "oops").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("oops"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn streams_are_styled_independently() {
        let console = Console {
            stdout_colored: true,
            stderr_colored: false,
        };
        let mut err = Vec::new();
        console.error(&mut err, "oops").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "oops\n");
        assert!(console.spinner("working").is_hidden());
    }

    #[test]
    fn plain_spinner_is_hidden() {
        assert!(Console::plain().spinner("working").is_hidden());
    }
}
