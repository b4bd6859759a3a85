use std::io::{self, Stdout, Write};

use crate::error::ReportResult;
use crate::render::RenderSink;

/// Writes each rendered line, newline-terminated, to an `io::Write` target.
#[derive(Debug)]
pub struct ConsoleSink<W: Write = Stdout> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { writer: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for ConsoleSink<W> {
    fn emit_line(&mut self, line: &str) -> ReportResult<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}
