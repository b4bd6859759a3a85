use std::fmt;
use std::sync::Arc;

use crate::error::ReportResult;
use crate::legacy::LegacyAnalytics;
use crate::render::RenderSink;

pub const CHART_RENDER_PREFIX: &str = "Rendering Chart -> ";

/// Shared handle to a legacy analytics source.
pub type LegacySource = Arc<dyn LegacyAnalytics + Send + Sync>;

/// Adapts a legacy analytics source to the report element contract.
///
/// The element shares the source with its caller and never caches what the
/// source returns: every `render` and `data` call goes straight through.
#[derive(Clone)]
pub struct ChartElement {
    source: LegacySource,
}

impl ChartElement {
    #[must_use]
    pub fn new(source: LegacySource) -> Self {
        Self { source }
    }

    /// Wraps an owned source in a fresh shared handle.
    #[must_use]
    pub fn from_source<L>(source: L) -> Self
    where
        L: LegacyAnalytics + Send + Sync + 'static,
    {
        Self::new(Arc::new(source))
    }

    #[must_use]
    pub fn source(&self) -> &LegacySource {
        &self.source
    }

    /// Raw legacy data, passed through unchanged.
    #[must_use]
    pub fn data(&self) -> String {
        self.source.raw_graph_data()
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> ReportResult<()> {
        let mut line = String::from(CHART_RENDER_PREFIX);
        self.source.draw_complex_graph(&mut line)?;
        sink.emit_line(&line)
    }
}

impl fmt::Debug for ChartElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartElement")
            .field("source_refs", &Arc::strong_count(&self.source))
            .finish()
    }
}
