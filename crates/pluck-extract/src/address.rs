//! Exact addressing of elements.

use pluck_dom::{Document, NodeId};
use pluck_path::{Path, Start, Step};

/// Fully-qualified, unambiguous path from the document root to `node`.
///
/// One step per ancestor element; a step carries a 1-based positional
/// predicate only when the element has same-tag siblings. The root element
/// terminates the walk as a fixed absolute prefix (it never has siblings).
/// Evaluating the result from the root yields exactly the original node.
///
/// Addressing is defined for element nodes only; for a text node the walk
/// starts at its enclosing element.
pub fn address_of(doc: &Document, node: NodeId) -> Path {
    let mut steps = Vec::new();

    let mut cur = if doc.is_element(node) {
        Some(node)
    } else {
        doc.parent(node)
    };

    while let Some(id) = cur {
        if let Some(tag) = doc.tag(id) {
            let (rank, total) = doc.same_tag_rank(id);
            let step = if total > 1 {
                Step::named(tag).at_position(rank)
            } else {
                Step::named(tag)
            };
            steps.push(step);
        }
        cur = doc.parent(id);
    }

    steps.reverse();
    Path {
        start: Start::Absolute,
        steps,
    }
}
