//! Family factories.
//!
//! Swapping the factory swaps the rendering style of every header and text
//! element created through it, with no change to calling code.

use crate::core::{HeaderElement, ReportFamily, TextElement};
use crate::error::ReportResult;

/// Creates header and text elements belonging to one family.
pub trait ReportFactory {
    fn family(&self) -> ReportFamily;

    /// Fails with `InvalidArgument` when `text` is blank.
    fn create_header(&self, text: &str) -> ReportResult<HeaderElement> {
        HeaderElement::styled(text, self.family())
    }

    /// Fails with `InvalidArgument` when `content` is blank.
    fn create_text(&self, content: &str) -> ReportResult<TextElement> {
        TextElement::styled(content, self.family())
    }
}

/// Markup-style factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlFactory;

impl ReportFactory for HtmlFactory {
    fn family(&self) -> ReportFamily {
        ReportFamily::Html
    }
}

/// Bracket-style factory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfFactory;

impl ReportFactory for PdfFactory {
    fn family(&self) -> ReportFamily {
        ReportFamily::Pdf
    }
}

impl ReportFamily {
    /// Factory producing this family's elements.
    #[must_use]
    pub fn factory(self) -> Box<dyn ReportFactory + Send + Sync> {
        match self {
            Self::Html => Box::new(HtmlFactory),
            Self::Pdf => Box::new(PdfFactory),
        }
    }
}

impl<F: ReportFactory + ?Sized> ReportFactory for Box<F> {
    fn family(&self) -> ReportFamily {
        (**self).family()
    }

    fn create_header(&self, text: &str) -> ReportResult<HeaderElement> {
        (**self).create_header(text)
    }

    fn create_text(&self, content: &str) -> ReportResult<TextElement> {
        (**self).create_text(content)
    }
}
