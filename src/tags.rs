//! Tag constructor surface
//!
//! One constructor per common HTML5 tag, each delegating to
//! [`element_with_attrs`] with its own name, plus the [`attrs!`](crate::attrs)
//! and [`children!`](crate::children) macros for literal call sites and the
//! [`Namespace`] grouping prefix. Constructors exist for convenience only —
//! any tag name, known or not, can be built through
//! [`element`](crate::element::element) directly.

use crate::element::{element_with_attrs, Attrs, Child, Node};

pub use crate::element::{is_void_tag, void_tags};

/// Build an [`Attrs`] mapping from literal `key => value` pairs.
///
/// Values may be anything convertible to
/// [`AttrValue`](crate::element::AttrValue): strings, numbers, booleans,
/// options.
#[macro_export]
macro_rules! attrs {
    () => { $crate::element::Attrs::new() };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut attrs = $crate::element::Attrs::new();
        $( attrs.set($key, $value); )+
        attrs
    }};
}

/// Build a child sequence from literal values.
///
/// Entries may be anything convertible to [`Child`](crate::element::Child):
/// strings, built nodes, options, nested vectors.
#[macro_export]
macro_rules! children {
    () => { ::std::vec::Vec::<$crate::element::Child>::new() };
    ( $( $child:expr ),+ $(,)? ) => {
        vec![ $( $crate::element::Child::from($child) ),+ ]
    };
}

macro_rules! tag_constructors {
    ( $( $(#[$meta:meta])* $name:ident, )* ) => {
        $(
            $(#[$meta])*
            pub fn $name(attrs: Attrs, children: Vec<Child>) -> Node {
                element_with_attrs(stringify!($name), attrs, children)
            }
        )*
    };
}

// Organized in the same order as
// https://developer.mozilla.org/en-US/docs/Web/HTML/Element
//
// Does not include obsolete elements.
tag_constructors! {
    // Main root and document metadata
    html,
    base,
    head,
    link,
    meta,
    style,
    title,

    // Sectioning root and content sectioning
    body,
    address,
    article,
    aside,
    footer,
    header,
    h1,
    h2,
    h3,
    h4,
    h5,
    h6,
    main,
    nav,
    section,

    // Text content
    blockquote,
    dd,
    div,
    dl,
    dt,
    figcaption,
    figure,
    hr,
    li,
    menu,
    ol,
    p,
    pre,
    ul,

    // Inline text semantics
    a,
    abbr,
    b,
    bdi,
    bdo,
    br,
    cite,
    code,
    data,
    dfn,
    em,
    i,
    kbd,
    mark,
    q,
    s,
    samp,
    small,
    span,
    strong,
    sub,
    sup,
    time,
    u,
    var,
    wbr,

    // Image and multimedia
    area,
    audio,
    img,
    map,
    track,
    video,

    // Embedded content
    embed,
    iframe,
    object,
    picture,
    source,

    // Scripting
    canvas,
    noscript,
    script,

    // Demarcating edits
    del,
    ins,

    // Table content
    caption,
    col,
    colgroup,
    table,
    tbody,
    td,
    tfoot,
    th,
    thead,
    tr,

    // Forms
    button,
    datalist,
    fieldset,
    form,
    input,
    label,
    legend,
    meter,
    optgroup,
    option,
    output,
    progress,
    select,
    textarea,

    // Interactive elements and web components
    details,
    dialog,
    summary,
    slot,
    template,
}

/// A secondary grouping prefix for element construction.
///
/// The prefix is carried through unchanged and never consulted by the
/// builder — it exists so call sites can group related constructors (say,
/// SVG work) without the core gaining any namespace resolution logic.
#[derive(Debug, Clone)]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    /// Create a grouping with an arbitrary, unvalidated prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Namespace {
            prefix: prefix.into(),
        }
    }

    /// The prefix this grouping was created with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build an element within this grouping. Equivalent to
    /// [`element_with_attrs`]; the prefix does not alter the output.
    pub fn element(&self, tag: &str, attrs: Attrs, children: Vec<Child>) -> Node {
        element_with_attrs(tag, attrs, children)
    }
}
