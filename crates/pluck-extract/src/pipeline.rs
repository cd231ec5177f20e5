//! The row-extraction pipeline.

use indexmap::IndexMap;
use pluck_dom::Document;
use pluck_path::{PathValue, Selector};

use crate::config::{RowMetadata, ScrapeConfig, ScrapeResult, ScrapedRow};
use crate::{Error, Result};

/// Runs a config against a document snapshot and returns ordered rows.
///
/// The main selector is authoritative: a syntax error there propagates and
/// no result is produced. Column selectors are best-effort: a column that
/// fails to parse or matches nothing contributes an empty string, so the
/// result's shape (row count, column set) never depends on which cells
/// happened to fail. Rows are never filtered or reordered; `is_empty` rows
/// are emitted with their flag set and left to the caller.
pub fn extract(doc: &Document, config: &ScrapeConfig) -> Result<ScrapeResult> {
    let main = Selector::parse(&config.main_selector).map_err(Error::SelectorSyntax)?;
    let anchors = main.evaluate(doc);

    let mut data = Vec::with_capacity(anchors.len());
    for (original_index, anchor) in anchors.into_iter().enumerate() {
        let mut row = IndexMap::with_capacity(config.columns.len());
        let mut is_empty = true;

        for column in &config.columns {
            let value = column_value(doc, &anchor, &column.selector);
            if !value.trim().is_empty() {
                is_empty = false;
            }
            // Last write wins on duplicate column names.
            row.insert(column.name.clone(), value);
        }

        data.push(ScrapedRow {
            data: row,
            metadata: RowMetadata {
                original_index,
                is_empty,
            },
        });
    }

    Ok(ScrapeResult {
        data,
        column_order: config.columns.iter().map(|c| c.name.clone()).collect(),
    })
}

/// One cell: `.` self text, `@attr` attribute lookup, or a nested path
/// evaluated relative to the anchor (first result, elements converted to
/// text). Failures of any kind degrade to the empty string.
fn column_value(doc: &Document, anchor: &PathValue, selector: &str) -> String {
    if selector == "." {
        return anchor.clone().into_text(doc);
    }

    if let Some(attr_name) = selector.strip_prefix('@') {
        return match anchor {
            // The attribute value passes through verbatim, whitespace
            // included; only element text and nested-path results are
            // normalized.
            PathValue::Element(id) => doc
                .attr(*id, attr_name)
                .map(str::to_string)
                .unwrap_or_default(),
            // String anchors carry no attributes.
            _ => String::new(),
        };
    }

    let PathValue::Element(anchor_id) = anchor else {
        return String::new();
    };
    let Ok(parsed) = Selector::parse(selector) else {
        // Swallowed: a misconfigured column must not abort the row.
        return String::new();
    };
    parsed
        .evaluate_from(doc, *anchor_id)
        .into_iter()
        .next()
        .map(|v| v.into_text(doc))
        .unwrap_or_default()
}
