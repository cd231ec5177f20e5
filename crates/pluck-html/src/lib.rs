//! HTML ingestion.
//!
//! Parses an HTML string with html5ever (via `scraper`) and converts the
//! resulting tree into a [`pluck_dom::Document`] snapshot. This is the
//! standalone analog of the live DOM an in-browser host would hand the
//! engine; the core crates never depend on it.
//!
//! Comments, doctypes and processing instructions are dropped; element
//! attributes and text (whitespace included) carry over as-is. html5ever
//! normalizes markup the way browsers do, so a fragment without `<html>`
//! still produces a rooted document.

use pluck_dom::{Document, DocumentBuilder, NodeId};
use scraper::{ElementRef, Html};


/// Parses HTML into a document snapshot rooted at the `html` element.
pub fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let root = parsed.root_element();

    let mut builder = DocumentBuilder::new(root.value().name());
    let root_id = builder.root();
    for (name, value) in root.value().attrs() {
        builder.attr(root_id, name, value);
    }
    convert_children(&mut builder, root_id, root);
    builder.build()
}

fn convert_children(builder: &mut DocumentBuilder, parent: NodeId, element: ElementRef<'_>) {
    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            let id = builder.elem(parent, child.value().name());
            for (name, value) in child.value().attrs() {
                builder.attr(id, name, value);
            }
            convert_children(builder, id, child);
        } else if let Some(text) = node.value().as_text() {
            builder.text(parent, &*text.text);
        }
    }
}
