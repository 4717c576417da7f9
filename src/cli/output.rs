//! Colored terminal output for repository commands.
//!
//! Status lines go to stdout and are silenced by `--quiet`. Errors always go
//! to stderr.

use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            quiet,
        }
    }

    /// Print a success line, prefixed with a green check mark
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.status(|buffer| {
            marked(buffer, "✓", Color::Green)?;
            writeln!(buffer, " {}", message)
        })
    }

    /// Print a warning line in yellow
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.status(|buffer| {
            marked(buffer, "⚠", Color::Yellow)?;
            buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(buffer, " {}", message)?;
            buffer.reset()
        })
    }

    /// Print a labelled value with the label highlighted
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        self.status(|buffer| {
            buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(buffer, "{:<8}", label)?;
            buffer.reset()?;
            writeln!(buffer, " {}", value)
        })
    }

    /// Print a plain line
    pub fn println(&self, message: &str) -> io::Result<()> {
        self.status(|buffer| writeln!(buffer, "{}", message))
    }

    /// Print an error line to stderr, regardless of quiet mode
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        let written = marked(&mut buffer, "✗", Color::Red)
            .and_then(|()| buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red))))
            .and_then(|()| writeln!(buffer, " {}", message))
            .and_then(|()| buffer.reset())
            .and_then(|()| stderr.print(&buffer));

        if written.is_err() {
            eprintln!("✗ {}", message);
        }
    }

    fn status(&self, render: impl FnOnce(&mut Buffer) -> io::Result<()>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.stdout.buffer();
        render(&mut buffer)?;
        self.stdout.print(&buffer)
    }
}

fn marked(buffer: &mut Buffer, mark: &str, color: Color) -> io::Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(buffer, "{}", mark)?;
    buffer.reset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_suppresses_status_lines() {
        let output = OutputManager::new(true);
        assert!(output.success("done").is_ok());
        assert!(output.warn("careful").is_ok());
        assert!(output.field("kind", "GITHUB").is_ok());
        assert!(output.println("plain").is_ok());
    }

    #[test]
    fn test_marked_writes_symbol() {
        let mut buffer = Buffer::no_color();
        marked(&mut buffer, "✓", Color::Green).expect("write mark");
        assert_eq!(buffer.as_slice(), "✓".as_bytes());
    }
}
