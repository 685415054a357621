//! Naming and node classification through the public API.

use catena::{
    NodeInfo, conventions, error_template_name, is_component_node, is_document_component,
    is_head_component, original_component_name, tag_name_for_component,
};

#[test]
fn reserved_tag_names() {
    assert_eq!(tag_name_for_component("head"), "HEAD");
    assert_eq!(tag_name_for_component("document"), "HTML");
    assert_eq!(original_component_name("HTML"), "document");
    assert_eq!(original_component_name("HEAD"), "head");
}

#[test]
fn prefixed_tag_names() {
    assert_eq!(original_component_name("cat-Widget"), "widget");
    assert_eq!(original_component_name("CAT-widget"), "widget");
    assert_eq!(tag_name_for_component("widget"), "CAT-WIDGET");
}

#[test]
fn round_trip_for_regular_names() {
    let names = [
        "widget",
        "Widget",
        "shopping-cart",
        "cart_item2",
        "a",
        "headline",
        "documents",
        "htmlx",
    ];
    for name in names {
        let tag = tag_name_for_component(name);
        assert!(tag.starts_with("CAT-"), "{tag}");
        assert_eq!(original_component_name(&tag), name.to_lowercase());
    }
}

#[test]
fn non_string_input_degrades_to_empty() {
    assert_eq!(error_template_name("widget"), "widget--error");
    assert_eq!(error_template_name(&123), "");
    assert_eq!(original_component_name(&None::<&str>), "");
    assert_eq!(tag_name_for_component(&3.5_f64), "");
}

#[test]
fn reserved_predicates() {
    assert!(is_document_component("DOCUMENT"));
    assert!(is_head_component("Head"));
    assert!(!is_document_component("cat-document"));
    assert!(!is_head_component("cat-head"));
}

#[test]
fn component_nodes() {
    assert!(is_component_node(&NodeInfo::new(1, "CAT-FOO")));
    assert!(!is_component_node(&NodeInfo::new(1, "DIV")));
    assert!(!is_component_node(&NodeInfo::new(3, "CAT-FOO")));
    assert!(is_component_node(&NodeInfo::element(conventions::HEAD_TAG_NAME)));
    assert!(is_component_node(&NodeInfo::element(conventions::DOCUMENT_TAG_NAME)));
}

#[test]
fn generated_tags_are_component_nodes() {
    for name in ["widget", "head", "document"] {
        let node = NodeInfo::element(tag_name_for_component(name));
        assert!(is_component_node(&node), "{name}");
    }
}
