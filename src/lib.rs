//! # swan
//!
//! A lightweight library for generating HTML and JS with a component-like syntax.
//!
//! Every build call returns a [`Node`](element::Node): a pair of strings holding
//! the serialized markup and the inline behavior statements collected from event
//! attributes on that subtree. Nodes compose — a parent call accepts the nodes of
//! its children — so nested function calls assemble a whole page without an
//! intermediate tree structure.
//!
//! ## Testing
//!
//! Integration tests use the fluent helpers in the [testing module](testing),
//! which provide deep assertions over built nodes and deterministic identifier
//! sources.

pub mod element;
pub mod literal;
pub mod render;
pub mod tags;
pub mod testing;

pub use element::{
    element, element_with_attrs, element_with_source, escape_html, is_void_tag, void_tags,
    AttrValue, Attrs, Child, IdSource, Node, UuidSource,
};
pub use render::{render, RenderError, RenderOptions};
