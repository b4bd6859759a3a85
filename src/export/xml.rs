use tracing::debug;

use crate::core::{ChartElement, HeaderElement, ReportCollection, TextElement};

use super::{ReportVisitor, export_fragments};

pub const XML_REPORT_OPEN: &str = "<report>";
pub const XML_REPORT_CLOSE: &str = "</report>";
const DEFAULT_INDENT: usize = 2;

/// Exports elements as XML-like tags.
///
/// Content is emitted verbatim, without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlExportVisitor {
    indent: usize,
}

impl Default for XmlExportVisitor {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl XmlExportVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces placed before each fragment in
    /// [`XmlExportVisitor::export_document`].
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Wraps the collection's fragments in `<report>` .. `</report>`.
    pub fn export_document(&mut self, collection: &ReportCollection) -> Vec<String> {
        let pad = " ".repeat(self.indent);
        let fragments = export_fragments(collection, self);

        let mut lines = Vec::with_capacity(fragments.len() + 2);
        lines.push(XML_REPORT_OPEN.to_owned());
        lines.extend(fragments.into_iter().map(|fragment| format!("{pad}{fragment}")));
        lines.push(XML_REPORT_CLOSE.to_owned());
        debug!(fragments = collection.len(), "exported xml document");
        lines
    }
}

impl ReportVisitor for XmlExportVisitor {
    type Output = String;

    fn visit_header(&mut self, header: &HeaderElement) -> String {
        format!("<header>{}</header>", header.text())
    }

    fn visit_text(&mut self, text: &TextElement) -> String {
        format!("<content>{}</content>", text.content())
    }

    fn visit_chart(&mut self, chart: &ChartElement) -> String {
        format!("<chart source='legacy'>{}</chart>", chart.data())
    }
}
