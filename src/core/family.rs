use std::fmt;

use serde::{Deserialize, Serialize};

/// Output style family shared by every element one factory creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFamily {
    /// Markup delimiters: `<h1>..</h1>`, `<p>..</p>`.
    #[default]
    Html,
    /// Bracket delimiters: `[PDF Header]: ..`, `[PDF Text Block]: ..`.
    Pdf,
}

impl ReportFamily {
    pub const ALL: [Self; 2] = [Self::Html, Self::Pdf];

    #[must_use]
    pub const fn style(self) -> ElementStyle {
        match self {
            Self::Html => ElementStyle {
                header_open: "<h1>",
                header_close: "</h1>",
                text_open: "<p>",
                text_close: "</p>",
            },
            Self::Pdf => ElementStyle {
                header_open: "[PDF Header]: ",
                header_close: "",
                text_open: "[PDF Text Block]: ",
                text_close: "",
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ReportFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delimiter tokens a family wraps around element content when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    pub header_open: &'static str,
    pub header_close: &'static str,
    pub text_open: &'static str,
    pub text_close: &'static str,
}

impl ElementStyle {
    #[must_use]
    pub fn header_line(&self, text: &str) -> String {
        format!("{}{text}{}", self.header_open, self.header_close)
    }

    #[must_use]
    pub fn text_line(&self, content: &str) -> String {
        format!("{}{content}{}", self.text_open, self.text_close)
    }
}
