use super::node::{DomNode, ListenerOptions};
use std::cell::Cell;

/// An ordered set of nodes with batched operations.
///
/// Readers look at the first node only; writers apply to every node.
/// The nodes themselves belong to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSet<N> {
    nodes: Vec<N>,
}

impl<N> Default for ElementSet<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N> From<Vec<N>> for ElementSet<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self { nodes }
    }
}

impl<N> ElementSet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn get(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }
}

impl<'a, N> IntoIterator for &'a ElementSet<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N: DomNode> ElementSet<N> {
    /// Attach `listener` to every node. Dropping the returned subscription
    /// leaves the listeners attached; call [`Subscription::off`] to detach.
    pub fn on(&self, event: &str, listener: N::Listener, options: ListenerOptions) -> Subscription<N> {
        for node in &self.nodes {
            node.add_event_listener(event, &listener, options);
        }

        Subscription {
            nodes: self.nodes.clone(),
            event: event.to_string(),
            listener,
            options,
            attached: Cell::new(true),
        }
    }

    /// Blank the rendered text of every node
    pub fn clear(&self) {
        self.set_inner_text("");
    }

    /// Detach every node from the document
    pub fn remove(&self) {
        for node in &self.nodes {
            node.remove();
        }
    }

    /// The first node that is, or is an ancestor of, `other`
    pub fn contains(&self, other: &N) -> Option<&N> {
        self.nodes.iter().find(|node| node.contains(other))
    }

    /// Read an attribute from the first node
    pub fn attr(&self, key: &str) -> Option<String> {
        self.nodes.first().and_then(|node| node.get_attribute(key))
    }

    /// Write an attribute on every node; `None` removes it
    pub fn set_attr(&self, key: &str, value: Option<&str>) {
        for node in &self.nodes {
            match value {
                Some(value) => node.set_attribute(key, value),
                None => node.remove_attribute(key),
            }
        }
    }

    pub fn text_content(&self) -> Option<String> {
        self.nodes.first().and_then(DomNode::text_content)
    }

    pub fn set_text_content(&self, text: &str) {
        for node in &self.nodes {
            node.set_text_content(text);
        }
    }

    pub fn inner_text(&self) -> Option<String> {
        self.nodes.first().and_then(DomNode::inner_text)
    }

    pub fn set_inner_text(&self, text: &str) {
        for node in &self.nodes {
            node.set_inner_text(text);
        }
    }

    pub fn inner_html(&self) -> Option<String> {
        self.nodes.first().and_then(DomNode::inner_html)
    }

    pub fn set_inner_html(&self, html: &str) {
        for node in &self.nodes {
            node.set_inner_html(html);
        }
    }

    /// Append `child` to the first node and a deep clone of it to every
    /// other node. A node can only have one parent, so only the first
    /// target receives `child` itself.
    pub fn append_child(&self, child: &N) {
        let mut nodes = self.nodes.iter();
        if let Some(first) = nodes.next() {
            first.append_child(child);
        }
        for node in nodes {
            match child.clone_node(true) {
                Some(copy) => node.append_child(&copy),
                None => tracing::warn!("could not clone node for append"),
            }
        }
    }

    /// Append a text node carrying `text`, as [`ElementSet::append_child`] does
    pub fn append_text(&self, text: &str) {
        if let Some(child) = self.nodes.first().and_then(|n| n.create_text_node(text)) {
            self.append_child(&child);
        }
    }
}

/// Listeners attached by [`ElementSet::on`]
pub struct Subscription<N: DomNode> {
    nodes: Vec<N>,
    event: String,
    listener: N::Listener,
    options: ListenerOptions,
    attached: Cell<bool>,
}

impl<N: DomNode> Subscription<N> {
    /// Detach the listener from every node it was attached to. Idempotent.
    pub fn off(&self) {
        if !self.attached.replace(false) {
            return;
        }
        for node in &self.nodes {
            node.remove_event_listener(&self.event, &self.listener, self.options);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}
