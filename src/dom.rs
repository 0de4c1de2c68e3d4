//! In-memory document model for loaded pages.
//!
//! Nodes live in a single arena and refer to each other by [`NodeId`]. The model is deliberately
//! small: elements with attributes and a class list, text nodes, and parent/child links in
//! document order. Structural mutations bump a generation counter so that anything derived from
//! the tree (such as the layout) knows when to recompute.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to a node in a [`Document`] arena.
pub struct NodeId(usize);

#[derive(Clone, Debug)]
/// Tag, attributes and class list of an element node.
pub struct Element {
    /// Lower-cased tag name.
    pub tag: String,
    /// Attributes other than `class`, in source order.
    pub attributes: Vec<(String, String)>,
    /// Class list, kept separately so markers can be toggled in place.
    pub classes: Vec<String>,
}

#[derive(Clone, Debug)]
/// What a node holds.
pub enum NodeKind {
    /// The document root; never has a parent.
    Root,
    /// An element.
    Element(Element),
    /// A run of character data.
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
/// Arena-backed element tree.
pub struct Document {
    nodes: Vec<Node>,
    generation: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Creates an empty document holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
            generation: 0,
        }
    }

    #[must_use]
    /// The root node every top-level element hangs from.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    /// Counter bumped on every structural change.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Creates a detached element; attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            classes: Vec::new(),
        }))
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Appends `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.generation += 1;
    }

    #[must_use]
    /// What the node holds.
    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    #[must_use]
    /// Tag name for elements, `None` for text and the root.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    #[must_use]
    /// Character data of a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    /// Parent of the node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    #[must_use]
    /// Child nodes in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Child elements in document order, skipping text.
    pub fn element_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .copied()
            .filter(move |c| self.element(*c).is_some())
    }

    #[must_use]
    /// First child that is an element.
    pub fn first_element_child(&self, node: NodeId) -> Option<NodeId> {
        self.element_children(node).next()
    }

    /// Sets an attribute. Setting `class` replaces the class list.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(el) = self.element_mut(node) else {
            return;
        };
        let name = name.to_ascii_lowercase();
        if name == "class" {
            el.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        if let Some(slot) = el.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.to_string();
        } else {
            el.attributes.push((name, value.to_string()));
        }
    }

    #[must_use]
    /// Attribute value, if present. `class` is not reported here; see [`Document::has_class`].
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?
            .attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    /// Value of the `id` attribute.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "id")
    }

    #[must_use]
    /// Whether the element carries `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    /// Adds `class` if absent. Returns whether the list changed.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.element_mut(node) {
            Some(el) if !el.classes.iter().any(|c| c == class) => {
                el.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    /// Removes `class` if present. Returns whether the list changed.
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.element_mut(node) {
            Some(el) if el.classes.iter().any(|c| c == class) => {
                el.classes.retain(|c| c != class);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    /// Every node below `node` in document (pre-order) order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Elements anywhere in the document matching `pred`, in document order.
    pub fn query_all(&self, pred: impl Fn(&Self, NodeId) -> bool) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|n| self.element(*n).is_some() && pred(self, *n))
            .collect()
    }

    #[must_use]
    /// First element whose `id` equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_all(|doc, n| doc.id(n) == Some(id))
            .into_iter()
            .next()
    }

    #[must_use]
    /// First element carrying `class`.
    pub fn first_by_class(&self, class: &str) -> Option<NodeId> {
        self.query_all(|doc, n| doc.has_class(n, class))
            .into_iter()
            .next()
    }

    #[must_use]
    /// Concatenated text below `node` with runs of whitespace collapsed to single spaces.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut raw = String::new();
        if let Some(text) = self.text(node) {
            raw.push_str(text);
        }
        for d in self.descendants(node) {
            if let Some(text) = self.text(d) {
                raw.push(' ');
                raw.push_str(text);
            }
        }
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
