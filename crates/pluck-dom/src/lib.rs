//! Arena document tree for the pluck extraction engine.
//!
//! The document owns every node in a flat arena; `NodeId` is an index into
//! it. Parent links are plain indices, so upward walks (addressing, ancestor
//! search) borrow the document instead of fighting ownership cycles.
//!
//! Two node kinds exist: elements (tag + ordered attribute list + children)
//! and text leaves. Attributes are not arena nodes; they live on their
//! element and are addressed by name.

mod builder;


pub use builder::DocumentBuilder;

/// Index of a node in its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element {
        tag: String,
        /// Ordered as authored; duplicate names keep the first occurrence
        /// authoritative for lookup.
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An immutable document snapshot.
///
/// Construction goes through [`DocumentBuilder`]; after `build()` the tree
/// never changes, which is what makes repeated evaluation idempotent.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// The root element (e.g. `html`). Every other node is a descendant.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).kind, NodeKind::Element { .. })
    }

    /// Tag name, `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Text payload of a text node, `None` for elements.
    pub fn text_of(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// All children in document order, text leaves included.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Element children in document order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
    }

    /// Attribute value by name. First occurrence wins on duplicates.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Ordered attribute list; empty for text nodes.
    pub fn attrs(&self, id: NodeId) -> &[(String, String)] {
        match &self.node(id).kind {
            NodeKind::Element { attrs, .. } => attrs,
            NodeKind::Text(_) => &[],
        }
    }

    /// 1-based rank of `id` among its parent's element children sharing its
    /// tag, together with how many such siblings exist (itself included).
    ///
    /// The root has no siblings and reports `(1, 1)`.
    pub fn same_tag_rank(&self, id: NodeId) -> (usize, usize) {
        let Some(tag) = self.tag(id) else {
            return (1, 1);
        };
        let Some(parent) = self.parent(id) else {
            return (1, 1);
        };

        let mut rank = 0;
        let mut total = 0;
        for sibling in self.element_children(parent) {
            if self.tag(sibling) == Some(tag) {
                total += 1;
                if sibling == id {
                    rank = total;
                }
            }
        }
        (rank, total)
    }

    /// All descendant elements of `id` in document order, `id` excluded.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id).iter().copied() {
            if self.is_element(child) {
                out.push(child);
                self.collect_descendants(child, out);
            }
        }
    }

    /// Elements following `id` among its parent's children, in order.
    pub fn following_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parent(id) else {
            return Vec::new();
        };
        self.children(parent)
            .iter()
            .copied()
            .skip_while(|&c| c != id)
            .skip(1)
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Ancestor elements of `id`, nearest first, root last.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cur = self.parent(id);
        while let Some(node) = cur {
            out.push(node);
            cur = self.parent(node);
        }
        out
    }

    /// Concatenated text of all text descendants, whitespace runs collapsed
    /// to single spaces, leading/trailing whitespace trimmed.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut raw = String::new();
        self.collect_text(id, &mut raw);

        let mut out = String::with_capacity(raw.len());
        let mut pending_space = false;
        for ch in raw.chars() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
            } else {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(ch);
            }
        }
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in self.children(id).iter().copied() {
                    self.collect_text(child, out);
                }
            }
        }
    }
}
