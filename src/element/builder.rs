//! Element builder core
//!
//! One build call serializes one element: attributes in insertion order,
//! event attributes extracted into behavior statements bound through a
//! per-element identity attribute, void tags self-closed, children flattened
//! and appended. Building never fails — every accepted input produces output
//! best-effort.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::attrs::{AttrValue, Attrs};
use super::child::{flatten, Child};
use super::escape::escape_html;
use super::identity::{IdSource, UuidSource};

/// Tag names that are always self-closing and never accept children.
const VOID_TAG_NAMES: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static VOID_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| VOID_TAG_NAMES.into_iter().collect());

/// The process-wide identifier source used by the convenience entry points.
static DEFAULT_IDS: UuidSource = UuidSource;

/// Whether a tag name belongs to the fixed self-closing set.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// The fixed self-closing tag set, in alphabetical order.
pub fn void_tags() -> &'static [&'static str] {
    &VOID_TAG_NAMES
}

/// Output of one build call: serialized markup plus the behavior statements
/// collected from event attributes on the element and its descendants.
///
/// `js` holds zero or more complete, independently executable statements;
/// concatenating the `js` fields of sibling nodes in child order yields a
/// valid statement sequence with registrations in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Serialized element or text markup.
    pub html: String,
    /// Event-registration statements for this subtree.
    pub js: String,
}

/// Build an element with no attributes.
pub fn element(tag: &str, children: Vec<Child>) -> Node {
    element_with_source(tag, Attrs::new(), children, &DEFAULT_IDS)
}

/// Build an element with attributes.
pub fn element_with_attrs(tag: &str, attrs: Attrs, children: Vec<Child>) -> Node {
    element_with_source(tag, attrs, children, &DEFAULT_IDS)
}

/// Build an element with an explicit identifier source.
///
/// Attributes serialize in insertion order. A value that resolves to
/// `Bool(true)` emits the bare attribute name; `Bool(false)` and `Absent`
/// emit nothing. Keys starting with `on` (case sensitive) are event
/// attributes: the element receives a single generated
/// ` data-swan-id="<id>"` attribute — one identity per element, shared by
/// all of its event attributes — and each event attribute appends one
/// registration statement whose body is the attribute value taken verbatim,
/// with the event object bound as `e`. Any other value is stringified,
/// escaped and emitted as ` key="value"`.
///
/// Tags in the void set close with `/>`; their children are silently
/// discarded, though behavior collected from their event attributes is kept.
pub fn element_with_source(
    tag: &str,
    attrs: Attrs,
    children: Vec<Child>,
    ids: &dyn IdSource,
) -> Node {
    let mut html = format!("<{tag}");
    let mut js = String::new();
    let mut element_id: Option<String> = None;

    for (key, value) in attrs.iter() {
        // `is` is reserved by the builder and never serialized.
        if key == "is" {
            continue;
        }
        match value.resolve() {
            AttrValue::Bool(true) => {
                html.push(' ');
                html.push_str(key);
            }
            AttrValue::Bool(false) | AttrValue::Absent => {}
            AttrValue::Text(text) => {
                if let Some(event) = key.strip_prefix("on") {
                    let id = match &element_id {
                        Some(id) => id.clone(),
                        None => {
                            let id = ids.next_id();
                            html.push_str(" data-swan-id=\"");
                            html.push_str(&id);
                            html.push('"');
                            element_id = Some(id.clone());
                            id
                        }
                    };
                    let event = event.to_lowercase();
                    js.push_str(&format!(
                        "document.querySelector('[data-swan-id=\"{id}\"]').addEventListener('{event}',(e)=>{{{text}}});\n"
                    ));
                } else {
                    html.push(' ');
                    html.push_str(key);
                    html.push_str("=\"");
                    html.push_str(&escape_html(&text));
                    html.push('"');
                }
            }
            // `resolve` has already collapsed lazy chains.
            AttrValue::Lazy(_) => {}
        }
    }

    if is_void_tag(tag) {
        html.push_str("/>");
        return Node { html, js };
    }

    html.push('>');

    for child in flatten(children) {
        match child {
            Child::Text(text) => html.push_str(&text),
            Child::Node(node) => {
                html.push_str(&node.html);
                js.push_str(&node.js);
            }
            // `flatten` leaves only leaves.
            Child::Group(_) | Child::Omitted => {}
        }
    }

    html.push_str("</");
    html.push_str(tag);
    html.push('>');

    Node { html, js }
}
