use tracing::trace;

use crate::core::{ChartElement, LegacySource, ReportElement};
use crate::error::ReportResult;
use crate::factory::ReportFactory;
use crate::render::RenderSink;

use super::ReportEngine;

impl<S: RenderSink> ReportEngine<S> {
    /// Appends a header created by the engine's factory.
    pub fn add_header(&mut self, text: &str) -> ReportResult<()> {
        let header = self.factory.create_header(text)?;
        self.push_element(header)
    }

    /// Appends a text block created by the engine's factory.
    pub fn add_text(&mut self, content: &str) -> ReportResult<()> {
        let text = self.factory.create_text(content)?;
        self.push_element(text)
    }

    /// Appends a chart adapting `source`. The source stays shared with the caller.
    pub fn add_chart(&mut self, source: LegacySource) -> ReportResult<()> {
        self.push_element(ChartElement::new(source))
    }

    /// Appends an element built elsewhere, subject to the collection's
    /// family lock.
    pub fn push_element(&mut self, element: impl Into<ReportElement>) -> ReportResult<()> {
        let element = element.into();
        let kind = element.kind();
        self.collection.push(element)?;
        trace!(%kind, count = self.collection.len(), "append report element");
        Ok(())
    }
}
