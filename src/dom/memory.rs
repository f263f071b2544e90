//! Arena-backed document used by tests and non-browser hosts.
//!
//! Nodes are never freed: `remove` only detaches a node from its parent, so a
//! `NodeId` stays valid for the lifetime of the document. Lookups walk the
//! attached tree from `<body>` in document order, which keeps detached nodes
//! out of query results the same way a browser does.

use super::Document;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    text: String,
    value: String,
    files: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let body = Node { tag: "body".to_owned(), ..Node::default() };
        Self { nodes: vec![body], body: NodeId(0) }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create an element under `parent`. A `class` attribute is split into
    /// individual classes.
    pub fn insert(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.alloc(tag);
        for (name, value) in attrs {
            self.set_attribute(&id, name, value);
        }
        self.append_child(&parent, &id);
        id
    }

    // --- Host-side state (what a user would change) ---

    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.value = value.to_owned();
        }
    }

    pub fn set_files(&mut self, id: NodeId, names: &[&str]) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.files = names.iter().map(|name| (*name).to_owned()).collect();
        }
    }

    // --- Inspection ---

    pub fn text(&self, id: NodeId) -> &str {
        self.nodes.get(id.0).map_or("", |node| node.text.as_str())
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        let node = self.nodes.get(id.0)?;
        node.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.nodes.get(id.0).map_or_else(Vec::new, |node| node.classes.clone())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.get(id.0).map_or_else(Vec::new, |node| node.children.clone())
    }

    /// Whether `id` is reachable from `<body>`.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == self.body {
                return true;
            }
            cursor = self.nodes.get(current.0).and_then(|node| node.parent);
        }
        false
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { tag: tag.to_ascii_lowercase(), ..Node::default() });
        id
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(id.0).and_then(|node| node.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.retain(|child| *child != id);
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.parent = None;
        }
    }

    /// Descendants of `root` in document order, excluding `root` itself.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(id.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn scoped(&self, scope: Option<&NodeId>) -> Vec<NodeId> {
        self.descendants(scope.copied().unwrap_or(self.body))
    }

    fn raw_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let node = self.nodes.get(id.0)?;
        node.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|node| self.raw_attribute(*node, "id") == Some(id))
    }

    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|node| self.raw_attribute(*node, "id").is_some_and(|id| id.starts_with(prefix)))
            .collect()
    }

    fn elements_with_class(&self, scope: Option<&NodeId>, class: &str) -> Vec<NodeId> {
        self.scoped(scope)
            .into_iter()
            .filter(|node| self.has_class(node, class))
            .collect()
    }

    fn elements_with_attribute(&self, scope: Option<&NodeId>, name: &str, value: Option<&str>) -> Vec<NodeId> {
        self.scoped(scope)
            .into_iter()
            .filter(|node| match (self.attribute(node, name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            })
            .collect()
    }

    fn previous_element_sibling(&self, el: &NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(el.0)?.parent?;
        let siblings = &self.nodes.get(parent.0)?.children;
        let index = siblings.iter().position(|child| child == el)?;
        index.checked_sub(1).and_then(|prev| siblings.get(prev).copied())
    }

    fn parent_element(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes.get(el.0)?.parent
    }

    fn first_descendant_with_tag(&self, el: &NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(*el)
            .into_iter()
            .find(|node| self.tag_name(node).eq_ignore_ascii_case(tag))
    }

    fn closest_with_attribute(&self, el: &NodeId, name: &str, value: &str) -> Option<NodeId> {
        let mut cursor = Some(*el);
        while let Some(current) = cursor {
            if self.raw_attribute(current, name) == Some(value) {
                return Some(current);
            }
            cursor = self.parent_element(&current);
        }
        None
    }

    fn tag_name(&self, el: &NodeId) -> String {
        self.nodes.get(el.0).map_or_else(String::new, |node| node.tag.clone())
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        if name == "class" {
            let node = self.nodes.get(el.0)?;
            if node.classes.is_empty() {
                return None;
            }
            return Some(node.classes.join(" "));
        }
        self.raw_attribute(*el, name).map(str::to_owned)
    }

    fn set_attribute(&mut self, el: &NodeId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(el.0) else {
            return;
        };
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_owned).collect();
            return;
        }
        match node.attrs.iter_mut().find(|(attr, _)| attr == name) {
            Some(slot) => slot.1 = value.to_owned(),
            None => node.attrs.push((name.to_owned(), value.to_owned())),
        }
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes
            .get(el.0)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, el: &NodeId, class: &str) {
        if self.has_class(el, class) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, el: &NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.classes.retain(|c| c != class);
        }
    }

    fn set_text(&mut self, el: &NodeId, text: &str) {
        for child in self.children(*el) {
            self.detach(child);
        }
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.text = text.to_owned();
        }
    }

    fn set_style(&mut self, el: &NodeId, property: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(el.0) else {
            return;
        };
        match node.style.iter_mut().find(|(name, _)| name == property) {
            Some(slot) => slot.1 = value.to_owned(),
            None => node.style.push((property.to_owned(), value.to_owned())),
        }
    }

    fn value(&self, el: &NodeId) -> String {
        self.nodes.get(el.0).map_or_else(String::new, |node| node.value.clone())
    }

    fn selected_file_names(&self, el: &NodeId) -> Vec<String> {
        self.nodes.get(el.0).map_or_else(Vec::new, |node| node.files.clone())
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || parent == child {
            return;
        }
        self.detach(*child);
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(*parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(*child);
        }
    }

    fn remove(&mut self, el: &NodeId) {
        self.detach(*el);
    }
}
