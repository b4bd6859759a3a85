use crate::error::ReportResult;
use crate::export::{self, ReportExport, ReportVisitor};
use crate::render::RenderSink;

use super::ReportEngine;

impl<S: RenderSink> ReportEngine<S> {
    /// XML-like document: `<report>`, one indented fragment per element,
    /// `</report>`.
    #[must_use]
    pub fn export_xml(&self) -> Vec<String> {
        let mut visitor = self.xml;
        visitor.export_document(&self.collection)
    }

    /// Runs an arbitrary visitor over the collection in insertion order.
    pub fn export_with<V: ReportVisitor>(&self, mut visitor: V) -> Vec<V::Output> {
        export::export_fragments(&self.collection, &mut visitor)
    }

    #[must_use]
    pub fn export_json(&self) -> ReportExport {
        ReportExport::from_collection(&self.collection)
    }

    pub fn export_json_contract_v1_pretty(&self) -> ReportResult<String> {
        self.export_json().to_json_contract_v1_pretty()
    }
}
