use std::io::{self, Write};

/// User feedback sink, gated by the resolved quiet flag.
///
/// Constructed once per invocation and passed to whatever wants to talk to
/// the user. Informational messages go to stdout and are dropped in quiet
/// mode; error messages go to stderr and are never dropped.
#[derive(Debug, Clone, Copy)]
pub struct Feedback {
    quiet: bool,
}

impl Feedback {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print an informational message unless quiet mode is on.
    pub fn info(&self, message: &str) {
        let _ = self.write_info(&mut io::stdout(), message);
    }

    fn write_info<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(out, "{message}")
    }

    /// Print an error message. The quiet flag does not apply to errors.
    pub fn error(&self, message: &str) {
        let _ = self.write_error(&mut io::stderr(), message);
    }

    fn write_error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{message}")
    }
}
