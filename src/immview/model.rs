use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Lowest year the archive covers (first issue).
pub const MIN_YEAR: i64 = 1869;
pub const MAX_YEAR: i64 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Page,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Page => "page",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three free-form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub year: String,
    pub month: String,
    pub page: String,
}

impl RawInput {
    pub fn new(
        year: impl Into<String>,
        month: impl Into<String>,
        page: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            page: page.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Year => &self.year,
            Field::Month => &self.month,
            Field::Page => &self.page,
        }
    }
}

/// A request whose bounds all hold. Only `validate` builds one, so holding a
/// `ValidatedRequest` is proof the year, month and page are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedRequest {
    year: u16,
    month: u8,
    page: u64,
}

impl ValidatedRequest {
    pub(crate) fn new_unchecked(year: u16, month: u8, page: u64) -> Self {
        Self { year, month, page }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Canonical file name, e.g. `2023_01.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}_{:02}.pdf", self.year, self.month)
    }
}

/// Structured failure payload for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub reason: String,
    pub detail: String,
    pub location: PathBuf,
    pub hints: Vec<String>,
}

/// Terminal result of one open request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OpenOutcome {
    Opened,
    Failed(FailureReport),
}

impl OpenOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, OpenOutcome::Opened)
    }

    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            OpenOutcome::Opened => None,
            OpenOutcome::Failed(report) => Some(report),
        }
    }
}
