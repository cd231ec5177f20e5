//! Selector evaluation over a document snapshot.
//!
//! Pure function of (selector, document, context node): the document is
//! only read, results come back in the order the tree walk produces them,
//! and no deduplication or re-sorting happens at any point. Alternation
//! branches concatenate in branch order.

use pluck_dom::{Document, NodeId};

use crate::Selector;
use crate::ast::{Axis, NodeTest, Path, Predicate, Start, Step};

/// One evaluation result: an element handle or an extracted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    Element(NodeId),
    /// Attribute value produced by an `@name` step.
    Attr(String),
    /// Text produced by a `text()` step.
    Text(String),
}

impl PathValue {
    /// String form used by the extraction pipeline: elements become their
    /// normalized text content, strings are trimmed as-is.
    pub fn into_text(self, doc: &Document) -> String {
        match self {
            PathValue::Element(id) => doc.text_content(id),
            PathValue::Attr(s) | PathValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// Evaluation context: either the synthetic document node (the parent of
/// the root element, where absolute paths anchor) or a real element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ctx {
    Doc,
    Node(NodeId),
}

pub fn evaluate(doc: &Document, selector: &Selector, ctx: NodeId) -> Vec<PathValue> {
    let mut out = Vec::new();
    for path in &selector.alternatives {
        eval_path(doc, path, ctx, &mut out);
    }
    out
}

fn eval_path(doc: &Document, path: &Path, ctx_node: NodeId, out: &mut Vec<PathValue>) {
    let mut ctxs: Vec<Ctx> = match path.start {
        Start::Absolute => vec![Ctx::Doc],
        Start::Relative => vec![Ctx::Node(ctx_node)],
    };

    if path.steps.is_empty() {
        // "." or "/": the context itself; the document node resolves to
        // the root element rather than leaking a synthetic handle.
        for ctx in ctxs {
            out.push(PathValue::Element(resolve(doc, ctx)));
        }
        return;
    }

    let last = path.steps.len() - 1;
    for (i, step) in path.steps.iter().enumerate() {
        let values = apply_step(doc, &ctxs, step);
        if i == last {
            out.extend(values);
            return;
        }
        // Intermediate steps continue from element results only; string
        // values have no children to walk.
        ctxs = values
            .into_iter()
            .filter_map(|v| match v {
                PathValue::Element(id) => Some(Ctx::Node(id)),
                _ => None,
            })
            .collect();
    }
}

fn resolve(doc: &Document, ctx: Ctx) -> NodeId {
    match ctx {
        Ctx::Doc => doc.root(),
        Ctx::Node(id) => id,
    }
}

fn apply_step(doc: &Document, ctxs: &[Ctx], step: &Step) -> Vec<PathValue> {
    let expanded: Vec<Ctx> = if step.descendant {
        let mut all = Vec::new();
        for &ctx in ctxs {
            descendant_or_self(doc, ctx, &mut all);
        }
        all
    } else {
        ctxs.to_vec()
    };

    let mut out = Vec::new();
    for &ctx in &expanded {
        // Candidates form one group per context node, so positional
        // predicates count within the group (per-parent for child steps).
        let mut group = candidates(doc, ctx, step);
        for predicate in &step.predicates {
            group = filter_predicate(doc, group, predicate);
        }
        out.extend(group);
    }
    out
}

fn descendant_or_self(doc: &Document, ctx: Ctx, out: &mut Vec<Ctx>) {
    out.push(ctx);
    match ctx {
        Ctx::Doc => {
            out.push(Ctx::Node(doc.root()));
            for id in doc.descendant_elements(doc.root()) {
                out.push(Ctx::Node(id));
            }
        }
        Ctx::Node(id) => {
            for desc in doc.descendant_elements(id) {
                out.push(Ctx::Node(desc));
            }
        }
    }
}

fn candidates(doc: &Document, ctx: Ctx, step: &Step) -> Vec<PathValue> {
    let scope: Vec<NodeId> = match (step.axis, ctx) {
        (Axis::Child, Ctx::Doc) => vec![doc.root()],
        (Axis::Child, Ctx::Node(id)) => doc.element_children(id).collect(),
        (Axis::FollowingSibling, Ctx::Node(id)) => doc.following_siblings(id),
        (Axis::Ancestor, Ctx::Node(id)) => doc.ancestors(id),
        // The document node has no siblings or ancestors.
        (_, Ctx::Doc) => Vec::new(),
    };

    match &step.test {
        NodeTest::Name(name) => scope
            .into_iter()
            .filter(|&id| doc.tag(id) == Some(name.as_str()))
            .map(PathValue::Element)
            .collect(),
        NodeTest::Wildcard => scope.into_iter().map(PathValue::Element).collect(),
        NodeTest::Text => match ctx {
            // text() reads the context's text children; only the child
            // axis makes sense here.
            Ctx::Node(id) if step.axis == Axis::Child => doc
                .children(id)
                .iter()
                .filter_map(|&c| doc.text_of(c))
                .map(|t| PathValue::Text(t.to_string()))
                .collect(),
            _ => Vec::new(),
        },
        NodeTest::Attr(name) => match ctx {
            // @name applies to the context node itself.
            Ctx::Node(id) if step.axis == Axis::Child => doc
                .attr(id, name)
                .map(|v| vec![PathValue::Attr(v.to_string())])
                .unwrap_or_default(),
            _ => Vec::new(),
        },
    }
}

fn filter_predicate(doc: &Document, group: Vec<PathValue>, predicate: &Predicate) -> Vec<PathValue> {
    match predicate {
        Predicate::Index(n) => {
            if *n == 0 {
                return Vec::new();
            }
            group.into_iter().nth(n - 1).into_iter().collect()
        }
        Predicate::Exists(path) => group
            .into_iter()
            .filter(|v| match v {
                PathValue::Element(id) => {
                    let mut matches = Vec::new();
                    eval_path(doc, path, *id, &mut matches);
                    !matches.is_empty()
                }
                // Existence tests are relative to an element context.
                _ => false,
            })
            .collect(),
    }
}
