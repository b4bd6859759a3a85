use std::slice;

use tracing::{trace, warn};

use crate::core::{ElementKind, ReportElement, ReportFamily};
use crate::error::{ReportError, ReportResult};
use crate::render::RenderSink;

/// Ordered report elements. Insertion order is render and export order.
///
/// A collection built with [`ReportCollection::for_family`] is locked to one
/// family and rejects styled elements from any other. Charts carry no family
/// and are always accepted.
#[derive(Debug, Clone, Default)]
pub struct ReportCollection {
    elements: Vec<ReportElement>,
    family: Option<ReportFamily>,
}

impl ReportCollection {
    /// Creates a permissive collection that accepts elements of any family.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_family(family: ReportFamily) -> Self {
        Self {
            elements: Vec::new(),
            family: Some(family),
        }
    }

    #[must_use]
    pub fn family(&self) -> Option<ReportFamily> {
        self.family
    }

    pub fn push(&mut self, element: impl Into<ReportElement>) -> ReportResult<()> {
        let element = element.into();
        if let (Some(expected), Some(found)) = (self.family, element.family()) {
            if expected != found {
                warn!(%expected, %found, kind = %element.kind(), "rejecting element from foreign family");
                return Err(ReportError::FamilyMismatch { expected, found });
            }
        }
        self.elements.push(element);
        trace!(count = self.elements.len(), "push report element");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[ReportElement] {
        &self.elements
    }

    pub fn iter(&self) -> slice::Iter<'_, ReportElement> {
        self.elements.iter()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ElementKind> {
        self.elements.iter().map(ReportElement::kind).collect()
    }

    /// Renders every element in order, stopping at the first sink failure.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> ReportResult<()> {
        for element in &self.elements {
            element.render(sink)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ReportCollection {
    type Item = &'a ReportElement;
    type IntoIter = slice::Iter<'a, ReportElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
