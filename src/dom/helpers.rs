use super::element_set::ElementSet;
use super::node::{Document, DomNode};
use serde_json::{Map, Value};

/// Nodes under `root` matching `selector`; empty when there is no root
pub fn query<N: DomNode>(root: Option<&N>, selector: &str) -> ElementSet<N> {
    match root {
        Some(root) => ElementSet::from(root.query_selector_all(selector)),
        None => ElementSet::new(),
    }
}

/// Nodes anywhere in `doc` matching `selector`
pub fn query_document<D: Document>(doc: &D, selector: &str) -> ElementSet<D::Node> {
    ElementSet::from(doc.query_selector_all(selector))
}

/// Create a `tag` element and assign each entry of `props` as a DOM property
pub fn create<D: Document>(doc: &D, tag: &str, props: Option<&Map<String, Value>>) -> Option<D::Node> {
    let node = doc.create_element(tag)?;
    if let Some(props) = props {
        for (name, value) in props {
            node.set_property(name, value);
        }
    }
    Some(node)
}

/// Test applied while walking up the tree
pub enum Matcher<'a, N> {
    Selector(&'a str),
    Predicate(&'a dyn Fn(&N) -> bool),
}

impl<'a, N: DomNode> Matcher<'a, N> {
    fn test(&self, node: &N) -> bool {
        match self {
            Matcher::Selector(selector) => node.matches(selector),
            Matcher::Predicate(predicate) => predicate(node),
        }
    }
}

impl<'a, N> From<&'a str> for Matcher<'a, N> {
    fn from(selector: &'a str) -> Self {
        Matcher::Selector(selector)
    }
}

/// `node` itself or its nearest ancestor element that satisfies `matcher`
pub fn up<'a, N: DomNode + 'a>(node: Option<N>, matcher: impl Into<Matcher<'a, N>>) -> Option<N> {
    let matcher = matcher.into();
    let mut current = node;

    while let Some(node) = current {
        if matcher.test(&node) {
            return Some(node);
        }
        current = node.parent_element();
    }

    None
}
