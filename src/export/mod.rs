//! Export passes over a report collection.
//!
//! Elements pick the visitor operation themselves (`ReportElement::accept`),
//! so export code never inspects element variants.

mod json;
mod xml;

pub use json::{
    ExportFragment, JsonExportVisitor, REPORT_EXPORT_JSON_SCHEMA_V1, ReportExport,
    ReportExportJsonContractV1,
};
pub use xml::{XML_REPORT_CLOSE, XML_REPORT_OPEN, XmlExportVisitor};

#[cfg(feature = "parallel-export")]
use rayon::prelude::*;

use crate::core::{ChartElement, HeaderElement, ReportCollection, TextElement};

/// One operation per element variant. Visiting never mutates the element.
pub trait ReportVisitor {
    type Output;

    fn visit_header(&mut self, header: &HeaderElement) -> Self::Output;
    fn visit_text(&mut self, text: &TextElement) -> Self::Output;
    fn visit_chart(&mut self, chart: &ChartElement) -> Self::Output;
}

impl<V: ReportVisitor + ?Sized> ReportVisitor for &mut V {
    type Output = V::Output;

    fn visit_header(&mut self, header: &HeaderElement) -> Self::Output {
        (**self).visit_header(header)
    }

    fn visit_text(&mut self, text: &TextElement) -> Self::Output {
        (**self).visit_text(text)
    }

    fn visit_chart(&mut self, chart: &ChartElement) -> Self::Output {
        (**self).visit_chart(chart)
    }
}

/// Visits every element once, returning fragments in collection order.
pub fn export_fragments<V>(collection: &ReportCollection, visitor: &mut V) -> Vec<V::Output>
where
    V: ReportVisitor + ?Sized,
{
    collection
        .iter()
        .map(|element| element.accept(visitor))
        .collect()
}

/// Same result as [`export_fragments`], computed per element on a clone of
/// `visitor`.
///
/// With the `parallel-export` feature the per-element work runs on the rayon
/// pool; fragments are still returned in collection order.
pub fn export_fragments_parallel<V>(collection: &ReportCollection, visitor: &V) -> Vec<V::Output>
where
    V: ReportVisitor + Clone + Sync,
    V::Output: Send,
{
    #[cfg(feature = "parallel-export")]
    {
        collection
            .elements()
            .par_iter()
            .map_init(|| visitor.clone(), |local, element| element.accept(local))
            .collect()
    }

    #[cfg(not(feature = "parallel-export"))]
    {
        let mut local = visitor.clone();
        export_fragments(collection, &mut local)
    }
}
