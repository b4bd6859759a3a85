use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ReportFamily;
use crate::error::{ReportError, ReportResult};

pub const MAX_EXPORT_INDENT: usize = 16;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can keep report setup in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEngineConfig {
    #[serde(default)]
    pub family: ReportFamily,
    /// Report title used by the demo binary; empty means "use the built-in title".
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_enforce_family")]
    pub enforce_family: bool,
}

impl Default for ReportEngineConfig {
    fn default() -> Self {
        Self::new(ReportFamily::default())
    }
}

impl ReportEngineConfig {
    #[must_use]
    pub fn new(family: ReportFamily) -> Self {
        Self {
            family,
            title: String::new(),
            indent: default_indent(),
            enforce_family: default_enforce_family(),
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: ReportFamily) -> Self {
        self.family = family;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the export indentation, in spaces, applied to each fragment.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Disables family locking, allowing elements from several families in
    /// one collection.
    #[must_use]
    pub fn with_enforce_family(mut self, enforce_family: bool) -> Self {
        self.enforce_family = enforce_family;
        self
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.indent > MAX_EXPORT_INDENT {
            return Err(ReportError::InvalidArgument(format!(
                "export indent must be <= {MAX_EXPORT_INDENT}, got {}",
                self.indent
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ReportResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ReportError::Serialization(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

fn default_indent() -> usize {
    2
}

fn default_enforce_family() -> bool {
    true
}
