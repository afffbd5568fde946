// In-memory document tree for exercising the DOM helpers without a browser
use super::node::{Document, DomNode, ListenerOptions};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt;
use std::iter::Peekable;
use std::rc::{Rc, Weak};
use std::str::Chars;

/// Listener that receives the dispatched event name
#[derive(Clone)]
pub struct FakeListener(Rc<dyn Fn(&str)>);

impl FakeListener {
    pub fn new(f: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl PartialEq for FakeListener {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0) as *const u8 == Rc::as_ptr(&other.0) as *const u8
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Element(String),
    Text,
    /// Raw markup assigned through `set_inner_html`
    Markup,
}

struct Data {
    kind: Kind,
    text: String,
    attributes: Vec<(String, String)>,
    properties: Map<String, Value>,
    children: Vec<FakeNode>,
    parent: Weak<RefCell<Data>>,
    listeners: Vec<(String, FakeListener, ListenerOptions)>,
}

impl Data {
    fn new(kind: Kind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            attributes: Vec::new(),
            properties: Map::new(),
            children: Vec::new(),
            parent: Weak::new(),
            listeners: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<Data>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.borrow().kind {
            Kind::Element(tag) => write!(f, "<{}>", tag),
            Kind::Text => write!(f, "#text({:?})", self.0.borrow().text),
            Kind::Markup => write!(f, "#markup"),
        }
    }
}

impl FakeNode {
    pub fn element(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Data::new(
            Kind::Element(tag.to_lowercase()),
            "",
        ))))
    }

    pub fn text(text: &str) -> Self {
        Self(Rc::new(RefCell::new(Data::new(Kind::Text, text))))
    }

    fn markup(html: &str) -> Self {
        Self(Rc::new(RefCell::new(Data::new(Kind::Markup, html))))
    }

    /// Build `<tag attr=..>` and append it under `self`
    pub fn child(&self, tag: &str, attributes: &[(&str, &str)]) -> FakeNode {
        let node = FakeNode::element(tag);
        for (name, value) in attributes {
            node.set_attribute(name, value);
        }
        self.append_child(&node);
        node
    }

    pub fn tag(&self) -> Option<String> {
        match &self.0.borrow().kind {
            Kind::Element(tag) => Some(tag.clone()),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<FakeNode> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<FakeNode> {
        self.0.borrow().parent.upgrade().map(FakeNode)
    }

    pub fn property(&self, name: &str) -> Option<Value> {
        self.0.borrow().properties.get(name).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.get_attribute("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(name, _, _)| name == event)
            .count()
    }

    /// Invoke the listeners registered for `event`; returns how many ran
    pub fn dispatch(&self, event: &str) -> usize {
        let listeners: Vec<FakeListener> = {
            let mut data = self.0.borrow_mut();
            let fired: Vec<_> = data
                .listeners
                .iter()
                .filter(|(name, _, _)| name == event)
                .map(|(_, l, o)| (l.clone(), o.once))
                .collect();
            data.listeners.retain(|(name, _, o)| !(name == event && o.once));
            fired.into_iter().map(|(l, _)| l).collect()
        };

        for listener in &listeners {
            (listener.0)(event);
        }
        listeners.len()
    }

    fn is_element(&self) -> bool {
        matches!(self.0.borrow().kind, Kind::Element(_))
    }

    fn descendants(&self, out: &mut Vec<FakeNode>) {
        for child in self.children() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn detach_children(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    fn collect_text(&self) -> String {
        let data = self.0.borrow();
        match data.kind {
            Kind::Element(_) => data.children.iter().map(FakeNode::collect_text).collect(),
            Kind::Text | Kind::Markup => data.text.clone(),
        }
    }

    fn serialize(&self) -> String {
        let data = self.0.borrow();
        match &data.kind {
            Kind::Element(tag) => {
                let attrs: String = data
                    .attributes
                    .iter()
                    .map(|(k, v)| format!(" {}=\"{}\"", k, v))
                    .collect();
                let inner: String = data.children.iter().map(FakeNode::serialize).collect();
                format!("<{}{}>{}</{}>", tag, attrs, inner, tag)
            }
            Kind::Text => data
                .text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
            Kind::Markup => data.text.clone(),
        }
    }

    fn replace_children_with(&self, child: Option<FakeNode>) {
        self.detach_children();
        if let Some(child) = child {
            self.append_child(&child);
        }
    }

    fn reflect_property(&self, name: &str, value: &Value) {
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match name {
            "id" | "title" => self.set_attribute(name, &text),
            "className" => self.set_attribute("class", &text),
            "textContent" => self.set_text_content(&text),
            "innerText" => self.set_inner_text(&text),
            _ => {}
        }
    }
}

// Simple selectors: `tag`, `*`, `.class`, `#id`, `[attr]`, `[attr=value]`,
// compounds of those, descendant combinators and comma lists.

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    id: Option<String>,
    attributes: Vec<(String, Option<String>)>,
}

fn read_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' || c == '#' || c == '[' {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

fn parse_compound(input: &str) -> Compound {
    let mut compound = Compound::default();
    let mut chars = input.chars().peekable();

    let tag = read_name(&mut chars);
    if !tag.is_empty() && tag != "*" {
        compound.tag = Some(tag.to_lowercase());
    }

    while let Some(c) = chars.next() {
        match c {
            '.' => compound.classes.push(read_name(&mut chars)),
            '#' => compound.id = Some(read_name(&mut chars)),
            '[' => {
                let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                match body.split_once('=') {
                    Some((name, value)) => compound.attributes.push((
                        name.trim().to_string(),
                        Some(value.trim().trim_matches(|c| c == '"' || c == '\'').to_string()),
                    )),
                    None => compound.attributes.push((body.trim().to_string(), None)),
                }
            }
            _ => {}
        }
    }

    compound
}

fn matches_compound(node: &FakeNode, compound: &Compound) -> bool {
    let tag = match node.tag() {
        Some(tag) => tag,
        None => return false,
    };
    if compound.tag.as_ref().is_some_and(|t| *t != tag) {
        return false;
    }
    if compound.id.is_some() && node.get_attribute("id") != compound.id {
        return false;
    }
    if !compound.classes.iter().all(|c| node.has_class(c)) {
        return false;
    }
    compound
        .attributes
        .iter()
        .all(|(name, expected)| match (node.get_attribute(name), expected) {
            (Some(actual), Some(expected)) => actual == *expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
}

fn matches_chain(node: &FakeNode, chain: &[Compound]) -> bool {
    let (last, rest) = match chain.split_last() {
        Some(split) => split,
        None => return false,
    };
    if !matches_compound(node, last) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }

    let mut ancestor = node.parent_element();
    while let Some(candidate) = ancestor {
        if matches_chain(&candidate, rest) {
            return true;
        }
        ancestor = candidate.parent_element();
    }
    false
}

fn matches_selector(node: &FakeNode, selector: &str) -> bool {
    selector.split(',').any(|part| {
        let chain: Vec<Compound> = part.split_whitespace().map(parse_compound).collect();
        matches_chain(node, &chain)
    })
}

impl DomNode for FakeNode {
    type Listener = FakeListener;

    fn matches(&self, selector: &str) -> bool {
        matches_selector(self, selector)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().filter(FakeNode::is_element)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Self> {
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter()
            .filter(|n| matches_selector(n, selector))
            .collect()
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if let Some(entry) = data.attributes.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
            return;
        }
        data.attributes.push((name.to_string(), value.to_string()));
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.retain(|(k, _)| k != name);
    }

    fn set_property(&self, name: &str, value: &Value) {
        self.0
            .borrow_mut()
            .properties
            .insert(name.to_string(), value.clone());
        self.reflect_property(name, value);
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.set_attribute("class", &classes.join(" "));
        }
    }

    fn text_content(&self) -> Option<String> {
        Some(self.collect_text())
    }

    fn set_text_content(&self, text: &str) {
        if self.is_element() {
            let child = (!text.is_empty()).then(|| FakeNode::text(text));
            self.replace_children_with(child);
        } else {
            self.0.borrow_mut().text = text.to_string();
        }
    }

    fn inner_text(&self) -> Option<String> {
        self.is_element().then(|| self.collect_text())
    }

    fn set_inner_text(&self, text: &str) {
        if self.is_element() {
            self.set_text_content(text);
        }
    }

    fn inner_html(&self) -> Option<String> {
        if !self.is_element() {
            return None;
        }
        Some(self.children().iter().map(FakeNode::serialize).collect())
    }

    fn set_inner_html(&self, html: &str) {
        if self.is_element() {
            let child = (!html.is_empty()).then(|| FakeNode::markup(html));
            self.replace_children_with(child);
        }
    }

    fn append_child(&self, child: &Self) {
        if child.contains(self) {
            tracing::warn!("refusing to append a node into its own subtree");
            return;
        }
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    fn clone_node(&self, deep: bool) -> Option<Self> {
        let copy = {
            let data = self.0.borrow();
            let mut copy = Data::new(data.kind.clone(), &data.text);
            copy.attributes = data.attributes.clone();
            copy.properties = data.properties.clone();
            FakeNode(Rc::new(RefCell::new(copy)))
        };
        if deep {
            for child in self.children() {
                if let Some(child_copy) = child.clone_node(true) {
                    copy.append_child(&child_copy);
                }
            }
        }
        Some(copy)
    }

    fn remove(&self) {
        let parent = self.parent();
        self.0.borrow_mut().parent = Weak::new();
        if let Some(parent) = parent {
            parent.0.borrow_mut().children.retain(|c| c != self);
        }
    }

    fn create_text_node(&self, text: &str) -> Option<Self> {
        Some(FakeNode::text(text))
    }

    fn add_event_listener(&self, event: &str, listener: &FakeListener, options: ListenerOptions) {
        let mut data = self.0.borrow_mut();
        let exists = data
            .listeners
            .iter()
            .any(|(name, l, o)| name == event && l == listener && o.capture == options.capture);
        if !exists {
            data.listeners
                .push((event.to_string(), listener.clone(), options));
        }
    }

    fn remove_event_listener(&self, event: &str, listener: &FakeListener, options: ListenerOptions) {
        self.0.borrow_mut().listeners.retain(|(name, l, o)| {
            !(name == event && l == listener && o.capture == options.capture)
        });
    }
}

/// A document whose tree hangs off an `<html>` root
pub struct FakeDocument {
    pub root: FakeNode,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            root: FakeNode::element("html"),
        }
    }
}

impl Document for FakeDocument {
    type Node = FakeNode;

    fn query_selector_all(&self, selector: &str) -> Vec<FakeNode> {
        let mut all = Vec::new();
        if self.root.matches(selector) {
            all.push(self.root.clone());
        }
        all.extend(self.root.query_selector_all(selector));
        all
    }

    fn create_element(&self, tag: &str) -> Option<FakeNode> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return None;
        }
        Some(FakeNode::element(tag))
    }
}
