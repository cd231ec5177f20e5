//! The pluck extraction engine.
//!
//! Four stages, composable but independent:
//!
//! - [`address_of`] gives an element its fully-qualified, unambiguous path.
//! - [`minimize`] shortens that path while the match count stays put.
//! - [`synthesize`] guesses a whole [`ScrapeConfig`] from one anchor node.
//! - [`extract`] runs a config against a document and produces ordered rows.
//!
//! Deriving a config ([`minimize`]/[`synthesize`]) is only needed when a
//! caller starts from a single picked node; [`extract`] runs every time data
//! is materialized, whether the config was synthesized or hand-edited.
//!
//! # Example
//!
//! ```
//! use pluck_dom::DocumentBuilder;
//! use pluck_extract::{ColumnDef, ScrapeConfig, extract};
//!
//! let mut b = DocumentBuilder::new("html");
//! let body = b.elem(b.root(), "body");
//! let a = b.elem_with(body, "a", &[("href", "/x")]);
//! b.text(a, "Go");
//! let doc = b.build();
//!
//! let config = ScrapeConfig {
//!     main_selector: "//a".to_string(),
//!     columns: vec![
//!         ColumnDef::new("Text", "."),
//!         ColumnDef::new("URL", "@href"),
//!     ],
//! };
//! let result = extract(&doc, &config).unwrap();
//! assert_eq!(result.data[0].data["URL"], "/x");
//! ```

mod address;
mod config;
mod heuristics;
mod minimize;
mod pipeline;

#[cfg(test)]
mod address_tests;
#[cfg(test)]
mod heuristics_tests;

pub use address::address_of;
pub use config::{ColumnDef, RowMetadata, ScrapeConfig, ScrapeResult, ScrapedRow};
pub use heuristics::{AnchorKind, synthesize};
pub use minimize::minimize;
pub use pipeline::extract;

pub use pluck_dom::{Document, DocumentBuilder, NodeId};
pub use pluck_path::{PathValue, Selector, SyntaxError};

/// Errors surfaced by the engine.
///
/// Only main-selector parse failures propagate; column-selector failures
/// inside [`extract`] degrade to empty cell values so one bad column never
/// aborts an otherwise-valid row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid selector: {0}")]
    SelectorSyntax(#[from] SyntaxError),
}

pub type Result<T> = std::result::Result<T, Error>;
