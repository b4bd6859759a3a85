pub mod chart;
pub mod collection;
pub mod elements;
pub mod family;

pub use chart::{CHART_RENDER_PREFIX, ChartElement, LegacySource};
pub use collection::ReportCollection;
pub use elements::{ElementKind, HeaderElement, ReportElement, TextElement};
pub use family::{ElementStyle, ReportFamily};
