use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ChartElement, ReportFamily};
use crate::error::{ReportError, ReportResult};
use crate::export::ReportVisitor;
use crate::render::RenderSink;

/// Variant tag of a report element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    Text,
    Chart,
}

impl ElementKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Text => "text",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn require_content(value: &str, field: &str) -> ReportResult<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Report title. Immutable once created by a factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderElement {
    text: String,
    family: ReportFamily,
}

impl HeaderElement {
    pub(crate) fn styled(text: impl Into<String>, family: ReportFamily) -> ReportResult<Self> {
        let text = text.into();
        require_content(&text, "header text")?;
        Ok(Self { text, family })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn family(&self) -> ReportFamily {
        self.family
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> ReportResult<()> {
        sink.emit_line(&self.family.style().header_line(&self.text))
    }
}

/// Report body block. Immutable once created by a factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    content: String,
    family: ReportFamily,
}

impl TextElement {
    pub(crate) fn styled(content: impl Into<String>, family: ReportFamily) -> ReportResult<Self> {
        let content = content.into();
        require_content(&content, "text content")?;
        Ok(Self { content, family })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn family(&self) -> ReportFamily {
        self.family
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> ReportResult<()> {
        sink.emit_line(&self.family.style().text_line(&self.content))
    }
}

/// Closed set of elements a report is made of.
#[derive(Debug, Clone)]
pub enum ReportElement {
    Header(HeaderElement),
    Text(TextElement),
    Chart(ChartElement),
}

impl ReportElement {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Header(_) => ElementKind::Header,
            Self::Text(_) => ElementKind::Text,
            Self::Chart(_) => ElementKind::Chart,
        }
    }

    /// Family the element was styled with. Charts render through the legacy
    /// source and belong to no family.
    #[must_use]
    pub fn family(&self) -> Option<ReportFamily> {
        match self {
            Self::Header(header) => Some(header.family()),
            Self::Text(text) => Some(text.family()),
            Self::Chart(_) => None,
        }
    }

    /// Emits this element's display line. Calling it repeatedly yields the
    /// same output.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> ReportResult<()> {
        match self {
            Self::Header(header) => header.render(sink),
            Self::Text(text) => text.render(sink),
            Self::Chart(chart) => chart.render(sink),
        }
    }

    /// Calls the one visitor operation matching this element's variant.
    pub fn accept<V: ReportVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Header(header) => visitor.visit_header(header),
            Self::Text(text) => visitor.visit_text(text),
            Self::Chart(chart) => visitor.visit_chart(chart),
        }
    }
}

impl From<HeaderElement> for ReportElement {
    fn from(value: HeaderElement) -> Self {
        Self::Header(value)
    }
}

impl From<TextElement> for ReportElement {
    fn from(value: TextElement) -> Self {
        Self::Text(value)
    }
}

impl From<ChartElement> for ReportElement {
    fn from(value: ChartElement) -> Self {
        Self::Chart(value)
    }
}
