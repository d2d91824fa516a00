//! Child model and the bounded flattening pass

use super::builder::Node;

/// How deep nested [`Child::Group`]s are followed before being dropped.
const MAX_GROUP_DEPTH: usize = 64;

/// One child of an element.
///
/// The closed set of shapes a child can take. `Text` is appended to the
/// parent's markup **without HTML escaping** — child text is trusted input,
/// unlike attribute values. Callers embedding untrusted text should pass it
/// through [`escape_html`](super::escape::escape_html) first. `Group` holds a
/// nested sibling sequence and is flattened before composition; `Omitted` is
/// dropped, which is what makes conditional inclusion expressions work.
#[derive(Debug, Clone)]
pub enum Child {
    /// Raw text, appended verbatim.
    Text(String),
    /// A previously built node; its markup and behavior are merged in order.
    Node(Node),
    /// A nested sequence of children, flattened to arbitrary depth.
    Group(Vec<Child>),
    /// Nothing; skipped during composition.
    Omitted,
}

impl Child {
    /// Conditional inclusion: build the child only when `condition` holds.
    pub fn when<F, C>(condition: bool, build: F) -> Child
    where
        F: FnOnce() -> C,
        C: Into<Child>,
    {
        if condition {
            build().into()
        } else {
            Child::Omitted
        }
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Child::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Child::Text(value)
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Child::Text(value.clone())
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Child::Node(value)
    }
}

impl<C> From<Option<C>> for Child
where
    C: Into<Child>,
{
    fn from(value: Option<C>) -> Self {
        match value {
            Some(child) => child.into(),
            None => Child::Omitted,
        }
    }
}

impl<C> From<Vec<C>> for Child
where
    C: Into<Child>,
{
    fn from(value: Vec<C>) -> Self {
        Child::Group(value.into_iter().map(Into::into).collect())
    }
}

impl<C> FromIterator<C> for Child
where
    C: Into<Child>,
{
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Child::Group(iter.into_iter().map(Into::into).collect())
    }
}

/// Flatten a child sequence into its `Text` and `Node` leaves, in encounter
/// order.
///
/// Runs iteratively over an explicit work stack, so pathological nesting
/// cannot exhaust the call stack; groups nested deeper than
/// `MAX_GROUP_DEPTH` are dropped. `Omitted` entries vanish.
pub(crate) fn flatten(children: Vec<Child>) -> Vec<Child> {
    let mut flat = Vec::with_capacity(children.len());
    let mut stack: Vec<(Child, usize)> = Vec::new();
    for child in children.into_iter().rev() {
        stack.push((child, 0));
    }
    while let Some((child, depth)) = stack.pop() {
        match child {
            Child::Omitted => {}
            Child::Group(items) => {
                if depth < MAX_GROUP_DEPTH {
                    for item in items.into_iter().rev() {
                        stack.push((item, depth + 1));
                    }
                }
            }
            leaf => flat.push(leaf),
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Child {
        Child::from(s)
    }

    fn texts(flat: &[Child]) -> Vec<String> {
        flat.iter()
            .map(|child| match child {
                Child::Text(t) => t.clone(),
                other => panic!("expected text leaf, found {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_flatten_preserves_order_across_nesting() {
        let children = vec![
            text("a"),
            Child::Group(vec![text("b"), Child::Group(vec![text("c")]), text("d")]),
            text("e"),
        ];
        assert_eq!(texts(&flatten(children)), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_drops_omitted() {
        let children = vec![
            Child::Omitted,
            text("kept"),
            Child::Group(vec![Child::Omitted]),
        ];
        assert_eq!(texts(&flatten(children)), ["kept"]);
    }

    #[test]
    fn test_flatten_bounds_group_depth() {
        let mut nested = text("too deep");
        for _ in 0..(MAX_GROUP_DEPTH + 1) {
            nested = Child::Group(vec![nested]);
        }
        assert!(flatten(vec![nested]).is_empty());

        let mut reachable = text("reachable");
        for _ in 0..MAX_GROUP_DEPTH {
            reachable = Child::Group(vec![reachable]);
        }
        assert_eq!(texts(&flatten(vec![reachable])), ["reachable"]);
    }

    #[test]
    fn test_when_builds_only_on_true() {
        assert!(matches!(
            Child::when(false, || "skipped"),
            Child::Omitted
        ));
        assert!(matches!(
            Child::when(true, || "built"),
            Child::Text(t) if t == "built"
        ));
    }

    #[test]
    fn test_collect_into_group() {
        let group: Child = ["a", "b"].into_iter().collect();
        assert!(matches!(&group, Child::Group(items) if items.len() == 2));
    }
}
