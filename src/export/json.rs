use serde::{Deserialize, Serialize};

use crate::core::{ChartElement, ElementKind, HeaderElement, ReportCollection, TextElement};
use crate::error::{ReportError, ReportResult};

use super::{ReportVisitor, export_fragments};

pub const REPORT_EXPORT_JSON_SCHEMA_V1: u32 = 1;
const LEGACY_SOURCE_TAG: &str = "legacy";

/// One exported element as a serializable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFragment {
    pub kind: ElementKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Exports elements as structured records instead of markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonExportVisitor;

impl ReportVisitor for JsonExportVisitor {
    type Output = ExportFragment;

    fn visit_header(&mut self, header: &HeaderElement) -> ExportFragment {
        ExportFragment {
            kind: ElementKind::Header,
            value: header.text().to_owned(),
            source: None,
        }
    }

    fn visit_text(&mut self, text: &TextElement) -> ExportFragment {
        ExportFragment {
            kind: ElementKind::Text,
            value: text.content().to_owned(),
            source: None,
        }
    }

    fn visit_chart(&mut self, chart: &ChartElement) -> ExportFragment {
        ExportFragment {
            kind: ElementKind::Chart,
            value: chart.data(),
            source: Some(LEGACY_SOURCE_TAG.to_owned()),
        }
    }
}

/// Ordered export of a whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportExport {
    pub fragments: Vec<ExportFragment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportExportJsonContractV1 {
    pub schema_version: u32,
    pub report: ReportExport,
}

impl ReportExport {
    #[must_use]
    pub fn from_collection(collection: &ReportCollection) -> Self {
        Self {
            fragments: export_fragments(collection, &mut JsonExportVisitor),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ReportResult<String> {
        let payload = ReportExportJsonContractV1 {
            schema_version: REPORT_EXPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ReportError::Serialization(format!("failed to serialize report export v1: {e}"))
        })
    }

    /// Accepts either a bare export or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ReportResult<Self> {
        if let Ok(report) = serde_json::from_str::<ReportExport>(input) {
            return Ok(report);
        }
        let payload: ReportExportJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ReportError::Serialization(format!("failed to parse report export json payload: {e}"))
        })?;
        if payload.schema_version != REPORT_EXPORT_JSON_SCHEMA_V1 {
            return Err(ReportError::Serialization(format!(
                "unsupported report export schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}
