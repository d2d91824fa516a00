//! Element building: composing HTML/JS node pairs from declarative calls

pub mod attrs;
pub mod builder;
pub mod child;
pub mod escape;
pub mod identity;

pub use attrs::{AttrValue, Attrs};
pub use builder::{element, element_with_attrs, element_with_source, is_void_tag, void_tags, Node};
pub use child::Child;
pub use escape::escape_html;
pub use identity::{IdSource, UuidSource};
