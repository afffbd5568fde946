use serde_json::Value;

/// Options for attaching an event listener
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
    pub once: bool,
    pub passive: bool,
}

impl ListenerOptions {
    pub fn capture() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }
}

/// The slice of a live document tree the helpers need.
///
/// All operations are total: a backend that hits a host error logs it and
/// carries on, matching how the DOM helpers treat bad input.
pub trait DomNode: Clone + PartialEq {
    /// Event handler type (a JS function in browsers)
    type Listener: Clone;

    fn matches(&self, selector: &str) -> bool;
    fn parent_element(&self) -> Option<Self>;
    /// Descendants matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> Vec<Self>;
    /// True if `other` is this node or one of its descendants
    fn contains(&self, other: &Self) -> bool;

    fn get_attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    /// Assign a DOM property (not an attribute)
    fn set_property(&self, name: &str, value: &Value);
    fn add_class(&self, class: &str);

    fn text_content(&self) -> Option<String>;
    fn set_text_content(&self, text: &str);
    fn inner_text(&self) -> Option<String>;
    fn set_inner_text(&self, text: &str);
    fn inner_html(&self) -> Option<String>;
    fn set_inner_html(&self, html: &str);

    /// Append `child`, moving it out of any previous parent
    fn append_child(&self, child: &Self);
    /// `None` when the host refuses to clone
    fn clone_node(&self, deep: bool) -> Option<Self>;
    /// Detach from the parent, if any
    fn remove(&self);
    /// A new text node owned by this node's document
    fn create_text_node(&self, text: &str) -> Option<Self>;

    fn add_event_listener(&self, event: &str, listener: &Self::Listener, options: ListenerOptions);
    fn remove_event_listener(
        &self,
        event: &str,
        listener: &Self::Listener,
        options: ListenerOptions,
    );
}

/// Document-level entry points
pub trait Document {
    type Node: DomNode;

    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;
    /// `None` when the host rejects the tag name
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
}
