//! Fluent assertion API for built nodes

use crate::element::Node;

/// Create an assertion builder for a node
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion { node }
}

/// Chainable assertions over one built node.
///
/// Each method panics with a descriptive message on mismatch and returns
/// `self` so assertions read as one chain.
pub struct NodeAssertion<'a> {
    node: &'a Node,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the html string equals `expected` exactly.
    pub fn html_eq(self, expected: &str) -> Self {
        assert_eq!(
            self.node.html, expected,
            "Expected html {:?}, found {:?}",
            expected, self.node.html
        );
        self
    }

    /// Assert the html string contains `needle`.
    pub fn html_contains(self, needle: &str) -> Self {
        assert!(
            self.node.html.contains(needle),
            "Expected html to contain {:?}, full html: {:?}",
            needle,
            self.node.html
        );
        self
    }

    /// Assert the html string does not contain `needle`.
    pub fn html_not_contains(self, needle: &str) -> Self {
        assert!(
            !self.node.html.contains(needle),
            "Expected html not to contain {:?}, full html: {:?}",
            needle,
            self.node.html
        );
        self
    }

    /// Assert the number of times `needle` occurs in the html string.
    pub fn html_count(self, needle: &str, expected: usize) -> Self {
        let actual = self.node.html.matches(needle).count();
        assert_eq!(
            actual, expected,
            "Expected {} occurrences of {:?} in html, found {}, full html: {:?}",
            expected, needle, actual, self.node.html
        );
        self
    }

    /// Assert the js string equals `expected` exactly.
    pub fn js_eq(self, expected: &str) -> Self {
        assert_eq!(
            self.node.js, expected,
            "Expected js {:?}, found {:?}",
            expected, self.node.js
        );
        self
    }

    /// Assert the js string contains `needle`.
    pub fn js_contains(self, needle: &str) -> Self {
        assert!(
            self.node.js.contains(needle),
            "Expected js to contain {:?}, full js: {:?}",
            needle,
            self.node.js
        );
        self
    }

    /// Assert the js string is empty.
    pub fn js_empty(self) -> Self {
        assert!(
            self.node.js.is_empty(),
            "Expected empty js, found {:?}",
            self.node.js
        );
        self
    }

    /// Extract the element's identity from `data-swan-id="..."`, asserting
    /// it is UUID-shaped and that the same identity is selected in the js
    /// string. Ends the chain.
    pub fn expect_identity(self) -> String {
        let marker = "data-swan-id=\"";
        let start = self
            .node
            .html
            .find(marker)
            .unwrap_or_else(|| panic!("No identity attribute in html: {:?}", self.node.html))
            + marker.len();
        let rest = &self.node.html[start..];
        let end = rest
            .find('"')
            .unwrap_or_else(|| panic!("Unterminated identity attribute in html: {:?}", self.node.html));
        let id = &rest[..end];

        assert_eq!(
            id.len(),
            36,
            "Expected a 36-character identity, found {:?}",
            id
        );
        for position in [8, 13, 18, 23] {
            assert_eq!(
                id.as_bytes()[position],
                b'-',
                "Expected UUID-shaped identity, found {:?}",
                id
            );
        }

        let selector = format!("[data-swan-id=\"{id}\"]");
        assert!(
            self.node.js.contains(&selector),
            "Expected js to select identity {:?}, full js: {:?}",
            id,
            self.node.js
        );

        id.to_string()
    }
}
