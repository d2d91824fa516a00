//! Unit tests for basic element building
//!
//! Covers the fundamental output shapes: open/close tag pairs, the
//! self-closing set, boolean and omitted attributes, attribute ordering and
//! the reserved `is` key.

use rstest::rstest;
use swan::element::{element, element_with_attrs, AttrValue, Attrs};
use swan::tags::div;
use swan::testing::assert_node;
use swan::{attrs, children};

// ============================================================================
// Open/close pairs and the void set
// ============================================================================

#[rstest]
#[case("div")]
#[case("span")]
#[case("p")]
#[case("ul")]
#[case("button")]
#[case("custom-element")]
fn test_non_void_tags_wrap_text_children(#[case] tag: &str) {
    assert_node(&element(tag, children!["text"])).html_eq(&format!("<{tag}>text</{tag}>"));
}

#[rstest]
#[case("area")]
#[case("base")]
#[case("br")]
#[case("col")]
#[case("embed")]
#[case("hr")]
#[case("img")]
#[case("input")]
#[case("link")]
#[case("meta")]
#[case("param")]
#[case("source")]
#[case("track")]
#[case("wbr")]
fn test_void_tags_self_close_and_discard_children(#[case] tag: &str) {
    let node = element_with_attrs(tag, attrs! { "src" => "x" }, children!["ignored-child"]);
    assert_node(&node)
        .html_eq(&format!("<{tag} src=\"x\"/>"))
        .html_not_contains(&format!("</{tag}>"))
        .html_not_contains("ignored-child");
}

// ============================================================================
// Attribute forms
// ============================================================================

#[test]
fn test_boolean_attribute_emits_bare_name() {
    let node = element_with_attrs("input", attrs! { "disabled" => true }, children![]);
    assert_node(&node)
        .html_contains(" disabled")
        .html_not_contains(" disabled=\"");
}

#[test]
fn test_false_attribute_is_omitted() {
    let node = element_with_attrs("div", attrs! { "hidden" => false }, children![]);
    assert_node(&node).html_eq("<div></div>");
}

#[test]
fn test_absent_attribute_is_omitted() {
    let node = element_with_attrs(
        "div",
        attrs! { "title" => AttrValue::Absent, "id" => "kept" },
        children![],
    );
    assert_node(&node).html_eq("<div id=\"kept\"></div>");
}

#[test]
fn test_none_option_attribute_is_omitted() {
    let node = element_with_attrs("div", attrs! { "title" => None::<&str> }, children![]);
    assert_node(&node).html_eq("<div></div>");
}

#[test]
fn test_numeric_attribute_values_are_stringified() {
    let node = element_with_attrs(
        "input",
        attrs! { "maxlength" => 80, "step" => 0.5 },
        children![],
    );
    assert_node(&node).html_eq("<input maxlength=\"80\" step=\"0.5\"/>");
}

#[test]
fn test_attributes_serialize_in_insertion_order() {
    let node = element_with_attrs(
        "div",
        attrs! { "id" => "app", "class" => "p-4", "title" => "hi" },
        children![],
    );
    assert_node(&node).html_eq("<div id=\"app\" class=\"p-4\" title=\"hi\"></div>");
}

#[test]
fn test_reserved_is_key_is_stripped() {
    let node = element_with_attrs(
        "div",
        attrs! { "is" => "fancy-div", "id" => "app" },
        children![],
    );
    assert_node(&node)
        .html_eq("<div id=\"app\"></div>")
        .html_not_contains("fancy-div");
}

// ============================================================================
// Lazy attribute values
// ============================================================================

#[test]
fn test_lazy_text_value_is_evaluated_at_build_time() {
    let node = element_with_attrs(
        "div",
        attrs! { "title" => AttrValue::lazy(|| "computed") },
        children![],
    );
    assert_node(&node).html_eq("<div title=\"computed\"></div>");
}

#[test]
fn test_lazy_boolean_values_take_the_boolean_branches() {
    let on = element_with_attrs(
        "input",
        attrs! { "checked" => AttrValue::lazy(|| true) },
        children![],
    );
    assert_node(&on).html_eq("<input checked/>");

    let off = element_with_attrs(
        "input",
        attrs! { "checked" => AttrValue::lazy(|| false) },
        children![],
    );
    assert_node(&off).html_eq("<input/>");
}

// ============================================================================
// Determinism and constructors
// ============================================================================

#[test]
fn test_identical_inputs_without_events_build_identical_html() {
    let build = || {
        element_with_attrs(
            "div",
            attrs! { "id" => "app", "class" => "p-4" },
            children!["stable"],
        )
    };
    assert_eq!(build(), build());
}

#[test]
fn test_tag_constructor_matches_generic_entry_point() {
    let via_constructor = div(attrs! { "id" => "x" }, children!["hi"]);
    let via_element = element_with_attrs("div", attrs! { "id" => "x" }, children!["hi"]);
    assert_eq!(via_constructor, via_element);
}

#[test]
fn test_fluent_attrs_builder() {
    let node = element_with_attrs(
        "div",
        Attrs::new().with("id", "app").with("class", "p-4"),
        children![],
    );
    assert_node(&node).html_eq("<div id=\"app\" class=\"p-4\"></div>");
}
