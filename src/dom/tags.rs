use super::node::{Document, DomNode};
use lazy_static::lazy_static;
use regex::Regex;

/// Category used when a caller has no better one
pub const DEFAULT_CATEGORY: &str = "tag";

lazy_static! {
    /// Runs of characters that are not ASCII word characters
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_]+").unwrap();
}

/// CSS-class-safe identifier for a label: "tag", "Hello World!" -> "tag-hello_world_"
pub fn tagify(category: &str, label: &str) -> String {
    format!("{}-{}", category, NON_WORD.replace_all(&label.to_lowercase(), "_"))
}

/// Add a tagified class to `node` for every non-empty label
pub fn tag_element<N, I, T>(node: &N, category: &str, labels: I)
where
    N: DomNode,
    I: IntoIterator<Item = T>,
    T: ToString,
{
    for label in labels.into_iter().map(|l| l.to_string()) {
        if label.is_empty() {
            continue;
        }
        node.add_class(&tagify(category, &label));
    }
}

/// Display text for a tag: `text` alone below two occurrences, `text(count)` from two up
pub fn tag_text(text: &str, count: u32) -> String {
    if count < 2 {
        text.to_string()
    } else {
        format!("{}({})", text, count)
    }
}

/// A `div` classed `tag` and `category`, with the tagified id in `data-tag`
pub fn create_tag<D: Document>(doc: &D, category: &str, text: &str, count: u32) -> Option<D::Node> {
    let node = doc.create_element("div")?;

    node.add_class("tag");
    node.add_class(category);
    node.set_attribute("data-tag", &tagify(category, text));

    let display = tag_text(text, count);
    node.set_attribute("title", &display);
    node.set_inner_text(&display);

    Some(node)
}
