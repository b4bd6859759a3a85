//! Fixed-interface analytics provider modelled as a third-party dependency.
//!
//! Nothing in this module knows about report elements; `core::ChartElement`
//! adapts it.

use std::fmt;

/// Interface exposed by the legacy analytics library. It is not redesigned
/// here, only wrapped.
pub trait LegacyAnalytics {
    /// Draws the graph onto a text canvas. The output format is opaque.
    fn draw_complex_graph(&self, canvas: &mut dyn fmt::Write) -> fmt::Result;

    /// Raw numeric data in the library's own string format.
    fn raw_graph_data(&self) -> String;
}

const DEFAULT_SERIES: [i64; 3] = [42, 15, 88];

/// Stock implementation of the legacy analytics library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAnalyticsLibrary {
    series: Vec<i64>,
}

impl Default for LegacyAnalyticsLibrary {
    fn default() -> Self {
        Self {
            series: DEFAULT_SERIES.to_vec(),
        }
    }
}

impl LegacyAnalyticsLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_series(series: Vec<i64>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn series(&self) -> &[i64] {
        &self.series
    }
}

impl LegacyAnalytics for LegacyAnalyticsLibrary {
    fn draw_complex_graph(&self, canvas: &mut dyn fmt::Write) -> fmt::Result {
        canvas.write_str(".:. Legacy Graph Data .:. ")
    }

    fn raw_graph_data(&self) -> String {
        let values: Vec<String> = self.series.iter().map(i64::to_string).collect();
        format!("DATA: {}", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_reports_stock_series() {
        let lib = LegacyAnalyticsLibrary::new();
        assert_eq!(lib.raw_graph_data(), "DATA: 42, 15, 88");
    }

    #[test]
    fn custom_series_is_formatted_in_order() {
        let lib = LegacyAnalyticsLibrary::with_series(vec![1, -2, 3]);
        assert_eq!(lib.raw_graph_data(), "DATA: 1, -2, 3");
        assert_eq!(lib.series(), &[1, -2, 3]);
    }

    #[test]
    fn empty_series_keeps_prefix() {
        let lib = LegacyAnalyticsLibrary::with_series(Vec::new());
        assert_eq!(lib.raw_graph_data(), "DATA: ");
    }

    #[test]
    fn draw_writes_banner() {
        let mut canvas = String::new();
        LegacyAnalyticsLibrary::new()
            .draw_complex_graph(&mut canvas)
            .expect("draw");
        assert_eq!(canvas, ".:. Legacy Graph Data .:. ");
    }
}
