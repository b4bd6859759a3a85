use std::fmt;

use tracing::debug;

use crate::core::{ReportCollection, ReportFamily};
use crate::error::ReportResult;
use crate::export::XmlExportVisitor;
use crate::factory::ReportFactory;
use crate::render::RenderSink;

/// Orchestration facade owning one factory, one collection and one sink.
///
/// Every header and text element goes through the engine's factory, so the
/// whole report shares one family. Swapping the family means building the
/// engine with another config; calling code stays the same.
pub struct ReportEngine<S: RenderSink> {
    pub(super) sink: S,
    pub(super) factory: Box<dyn ReportFactory + Send + Sync>,
    pub(super) collection: ReportCollection,
    pub(super) xml: XmlExportVisitor,
}

impl<S: RenderSink + fmt::Debug> fmt::Debug for ReportEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportEngine")
            .field("family", &self.factory.family())
            .field("collection", &self.collection)
            .field("sink", &self.sink)
            .field("xml", &self.xml)
            .finish()
    }
}

impl<S: RenderSink> ReportEngine<S> {
    #[must_use]
    pub fn family(&self) -> ReportFamily {
        self.factory.family()
    }

    #[must_use]
    pub fn collection(&self) -> &ReportCollection {
        &self.collection
    }

    /// Renders every element into the sink, in insertion order.
    pub fn render(&mut self) -> ReportResult<()> {
        self.collection.render(&mut self.sink)?;
        debug!(elements = self.collection.len(), family = %self.family(), "rendered report");
        Ok(())
    }

    /// Writes one free-form line (section banners, blank separators) to the sink.
    pub fn emit_line(&mut self, line: &str) -> ReportResult<()> {
        self.sink.emit_line(line)
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
