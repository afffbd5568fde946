// DOM helpers over a minimal capability interface
// Browser builds: `web` implements the interface for web-sys nodes
// Tests: `fake` provides an in-memory tree

pub mod element_set;
pub mod helpers;
pub mod node;
pub mod tags;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod fake;

pub use element_set::{ElementSet, Subscription};
pub use helpers::{create, query, query_document, up, Matcher};
pub use node::{Document, DomNode, ListenerOptions};
pub use tags::{create_tag, tag_element, tagify, DEFAULT_CATEGORY};
