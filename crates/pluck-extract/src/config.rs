//! Configuration and result data types.
//!
//! These are the values that cross the engine boundary: configs arrive as
//! JSON authored by a configuration surface (or come out of the
//! synthesizer), results go back to whoever asked for rows. Wire names are
//! camelCase to match the external contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One named column: a header plus the selector evaluated per anchor.
///
/// `selector` is either the `.` self-text shorthand, an `@attr` attribute
/// shorthand, or a path evaluated relative to the row anchor. Names need
/// not be unique; display order is list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub selector: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
        }
    }
}

/// A complete extraction rule: the row anchor selector plus columns.
///
/// The engine treats a config as immutable input to one [`extract`]
/// invocation; validity (non-empty selector, non-empty columns) is the
/// caller's concern.
///
/// [`extract`]: crate::extract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeConfig {
    pub main_selector: String,
    pub columns: Vec<ColumnDef>,
}

/// Per-row bookkeeping attached by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMetadata {
    /// 0-based position of the row's anchor in main-selector evaluation
    /// order. Stable even if a caller later filters rows.
    pub original_index: usize,
    /// True iff every extracted value was empty or whitespace-only.
    /// Filtering on it is a presentation decision, not the pipeline's.
    pub is_empty: bool,
}

/// One extracted row. Keys are column names; a duplicated column name
/// overwrites earlier values (last write wins), insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRow {
    pub data: IndexMap<String, String>,
    pub metadata: RowMetadata,
}

/// Result of one pipeline invocation.
///
/// `column_order` is authoritative for display/export order, duplicates
/// included, even when a row's map is missing a key or iterates
/// differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub data: Vec<ScrapedRow>,
    pub column_order: Vec<String>,
}

impl ScrapeResult {
    /// Rows flagged `is_empty`, for "N rows found, M empty" reporting.
    pub fn empty_row_count(&self) -> usize {
        self.data.iter().filter(|r| r.metadata.is_empty).count()
    }
}
