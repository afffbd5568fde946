// Live DOM backend on web-sys
// Host errors are logged and swallowed; the helper API stays total.

use super::node::{Document, DomNode, ListenerOptions};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, EventListenerOptions, HtmlElement, Node, NodeList};

fn log_failure(operation: &str, err: JsValue) {
    tracing::warn!(operation = operation, error = ?err, "DOM operation failed");
}

fn collect(list: NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn json_to_js(value: &Value) -> JsValue {
    match value {
        Value::Null => JsValue::NULL,
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Number(n) => n.as_f64().map_or(JsValue::NULL, JsValue::from_f64),
        Value::String(s) => JsValue::from_str(s),
        other => js_sys::JSON::parse(&other.to_string()).unwrap_or(JsValue::UNDEFINED),
    }
}

/// The window's document, if running in a browser window
pub fn window_document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

impl DomNode for Node {
    type Listener = js_sys::Function;

    fn matches(&self, selector: &str) -> bool {
        self.dyn_ref::<Element>()
            .is_some_and(|el| el.matches(selector).unwrap_or(false))
    }

    fn parent_element(&self) -> Option<Self> {
        Node::parent_element(self).map(Node::from)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Self> {
        let result = if let Some(el) = self.dyn_ref::<Element>() {
            el.query_selector_all(selector)
        } else if let Some(doc) = self.dyn_ref::<web_sys::Document>() {
            doc.query_selector_all(selector)
        } else {
            return Vec::new();
        };

        match result {
            Ok(list) => collect(list),
            Err(err) => {
                log_failure("querySelectorAll", err);
                Vec::new()
            }
        }
    }

    fn contains(&self, other: &Self) -> bool {
        Node::contains(self, Some(other))
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Some(el) = self.dyn_ref::<Element>() {
            if let Err(err) = el.set_attribute(name, value) {
                log_failure("setAttribute", err);
            }
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Some(el) = self.dyn_ref::<Element>() {
            if let Err(err) = el.remove_attribute(name) {
                log_failure("removeAttribute", err);
            }
        }
    }

    fn set_property(&self, name: &str, value: &Value) {
        if let Err(err) = js_sys::Reflect::set(self, &JsValue::from_str(name), &json_to_js(value)) {
            log_failure("setProperty", err);
        }
    }

    fn add_class(&self, class: &str) {
        if let Some(el) = self.dyn_ref::<Element>() {
            if let Err(err) = el.class_list().add_1(class) {
                log_failure("classList.add", err);
            }
        }
    }

    fn text_content(&self) -> Option<String> {
        Node::text_content(self)
    }

    fn set_text_content(&self, text: &str) {
        Node::set_text_content(self, Some(text));
    }

    fn inner_text(&self) -> Option<String> {
        match self.dyn_ref::<HtmlElement>() {
            Some(el) => Some(el.inner_text()),
            None if self.is_instance_of::<Element>() => Node::text_content(self),
            None => None,
        }
    }

    fn set_inner_text(&self, text: &str) {
        match self.dyn_ref::<HtmlElement>() {
            Some(el) => el.set_inner_text(text),
            None if self.is_instance_of::<Element>() => Node::set_text_content(self, Some(text)),
            None => {}
        }
    }

    fn inner_html(&self) -> Option<String> {
        self.dyn_ref::<Element>().map(Element::inner_html)
    }

    fn set_inner_html(&self, html: &str) {
        if let Some(el) = self.dyn_ref::<Element>() {
            el.set_inner_html(html);
        }
    }

    fn append_child(&self, child: &Self) {
        if let Err(err) = Node::append_child(self, child) {
            log_failure("appendChild", err);
        }
    }

    fn clone_node(&self, deep: bool) -> Option<Self> {
        Node::clone_node_with_deep(self, deep)
            .map_err(|err| log_failure("cloneNode", err))
            .ok()
    }

    fn remove(&self) {
        if let Some(parent) = self.parent_node() {
            if let Err(err) = parent.remove_child(self) {
                log_failure("removeChild", err);
            }
        }
    }

    fn create_text_node(&self, text: &str) -> Option<Self> {
        let doc = self
            .owner_document()
            .or_else(|| self.dyn_ref::<web_sys::Document>().cloned())?;
        Some(doc.create_text_node(text).into())
    }

    fn add_event_listener(&self, event: &str, listener: &js_sys::Function, options: ListenerOptions) {
        let opts = AddEventListenerOptions::new();
        opts.set_capture(options.capture);
        opts.set_once(options.once);
        opts.set_passive(options.passive);

        if let Err(err) =
            self.add_event_listener_with_callback_and_add_event_listener_options(event, listener, &opts)
        {
            log_failure("addEventListener", err);
        }
    }

    fn remove_event_listener(
        &self,
        event: &str,
        listener: &js_sys::Function,
        options: ListenerOptions,
    ) {
        let opts = EventListenerOptions::new();
        opts.set_capture(options.capture);

        if let Err(err) =
            self.remove_event_listener_with_callback_and_event_listener_options(event, listener, &opts)
        {
            log_failure("removeEventListener", err);
        }
    }
}

impl Document for web_sys::Document {
    type Node = Node;

    fn query_selector_all(&self, selector: &str) -> Vec<Node> {
        match web_sys::Document::query_selector_all(self, selector) {
            Ok(list) => collect(list),
            Err(err) => {
                log_failure("querySelectorAll", err);
                Vec::new()
            }
        }
    }

    fn create_element(&self, tag: &str) -> Option<Node> {
        web_sys::Document::create_element(self, tag)
            .map(Node::from)
            .map_err(|err| log_failure("createElement", err))
            .ok()
    }
}
