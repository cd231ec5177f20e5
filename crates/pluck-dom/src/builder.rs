//! Imperative construction of immutable documents.

use crate::{Document, NodeData, NodeId, NodeKind};

/// Builds a [`Document`] top-down: create the root, attach children to any
/// existing node, then `build()`.
///
/// ```
/// use pluck_dom::DocumentBuilder;
///
/// let mut b = DocumentBuilder::new("html");
/// let body = b.elem(b.root(), "body");
/// let link = b.elem(body, "a");
/// b.attr(link, "href", "/home");
/// b.text(link, "Home");
/// let doc = b.build();
/// assert_eq!(doc.text_content(doc.root()), "Home");
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl DocumentBuilder {
    pub fn new(root_tag: impl Into<String>) -> Self {
        let root = NodeData {
            kind: NodeKind::Element {
                tag: root_tag.into(),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Appends an element child and returns its id.
    pub fn elem(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.into(),
                attrs: Vec::new(),
            },
        )
    }

    /// Appends a text leaf.
    pub fn text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push(parent, NodeKind::Text(text.into()))
    }

    /// Appends an attribute to an element. No-op on text nodes.
    pub fn attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.index()].kind {
            attrs.push((name.into(), value.into()));
        }
    }

    /// Shorthand: element with attributes in one call.
    pub fn elem_with(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        attrs: &[(&str, &str)],
    ) -> NodeId {
        let id = self.elem(parent, tag);
        for (name, value) in attrs {
            self.attr(id, *name, *value);
        }
        id
    }

    pub fn build(self) -> Document {
        Document {
            nodes: self.nodes,
            root: self.root,
        }
    }
}
