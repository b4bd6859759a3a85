mod buffer_sink;
mod console_sink;

pub use buffer_sink::BufferSink;
pub use console_sink::ConsoleSink;

use crate::error::ReportResult;

/// Destination for rendered display lines.
///
/// Elements describe themselves one line at a time; where the lines end up
/// (stdout, a buffer, a test recorder) is the sink's concern.
pub trait RenderSink {
    fn emit_line(&mut self, line: &str) -> ReportResult<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn emit_line(&mut self, line: &str) -> ReportResult<()> {
        (**self).emit_line(line)
    }
}
