use crate::error::ReportResult;
use crate::render::RenderSink;

/// In-memory sink used by tests and headless rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drains captured lines, leaving the sink empty.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl RenderSink for BufferSink {
    fn emit_line(&mut self, line: &str) -> ReportResult<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
