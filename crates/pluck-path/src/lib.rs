//! The pluck selector language: a constrained XPath subset.
//!
//! Supported forms: absolute (`/a/b`, `//a`) and relative paths, `.` self,
//! `@name` attribute steps, `*` wildcards, `text()`, positional predicates
//! (`[2]`), existence predicates (`[td]`, `[@selected]`), alternation
//! (`a | b`), and the `following-sibling::` / `ancestor::` axes.
//!
//! # Example
//!
//! ```
//! use pluck_dom::DocumentBuilder;
//! use pluck_path::Selector;
//!
//! let mut b = DocumentBuilder::new("html");
//! let body = b.elem(b.root(), "body");
//! let a = b.elem_with(body, "a", &[("href", "/home")]);
//! b.text(a, "Home");
//! let doc = b.build();
//!
//! let selector = Selector::parse("//a/@href").unwrap();
//! assert_eq!(selector.count(&doc), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod eval;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

use pluck_dom::{Document, NodeId};

pub use ast::{Axis, NodeTest, Path, Predicate, Start, Step};
pub use eval::PathValue;

/// A selector failed to parse.
///
/// `span` is the byte range of the offending token in the selector string;
/// [`diagnostics::SyntaxErrorPrinter`] turns it into an annotated snippet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: std::ops::Range<usize>,
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

/// A parsed selector expression: one or more paths joined by `|`.
///
/// Evaluation is a pure function of (selector, document, context node); the
/// document is never mutated and no state is carried between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub alternatives: Vec<Path>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input)
    }

    /// Evaluates from the document root. Relative paths resolve against
    /// the root element.
    pub fn evaluate(&self, doc: &Document) -> Vec<PathValue> {
        eval::evaluate(doc, self, doc.root())
    }

    /// Evaluates with an explicit context node for relative paths.
    /// Absolute alternatives still anchor at the document root.
    pub fn evaluate_from(&self, doc: &Document, ctx: NodeId) -> Vec<PathValue> {
        eval::evaluate(doc, self, ctx)
    }

    /// Match count without materializing element text. Used heavily by the
    /// selector minimizer, which only ever compares cardinalities.
    pub fn count(&self, doc: &Document) -> usize {
        self.evaluate(doc).len()
    }

    pub fn count_from(&self, doc: &Document, ctx: NodeId) -> usize {
        self.evaluate_from(doc, ctx).len()
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, path) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{path}")?;
        }
        Ok(())
    }
}
