//! The fixed component vocabulary.
//!
//! Tag names of regular components are built from [`COMPONENT_PREFIX`];
//! the two reserved components (`document` and `head`) map through a fixed
//! table instead.

use phf::{phf_map, phf_set};

/// DOM node type of an element.
pub const ELEMENT_NODE_TYPE: u16 = 1;

/// DOM node type of an attribute.
pub const ATTRIBUTE_NODE_TYPE: u16 = 2;

/// Prefix of every regular component tag name. Matched case-insensitively.
pub const COMPONENT_PREFIX: &str = "cat-";

/// Key under which a component element stores its instance id.
pub const COMPONENT_ID: &str = "$catbeeId";

/// Postfix appended to a component name to name its error template.
pub const COMPONENT_ERROR_TEMPLATE_POSTFIX: &str = "--error";

/// Logical name of the component bound to the document root.
pub const DOCUMENT_COMPONENT_NAME: &str = "document";

/// Lowercase name of the document root element.
pub const DOCUMENT_ELEMENT_NAME: &str = "html";

/// Tag name of the document root element.
pub const DOCUMENT_TAG_NAME: &str = "HTML";

/// Logical name of the component bound to `<head>`.
pub const HEAD_COMPONENT_NAME: &str = "head";

/// Tag name of the head element.
pub const HEAD_TAG_NAME: &str = "HEAD";

/// Reserved logical names and the tag each one is rendered as.
pub(crate) static RESERVED_TAG_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "document" => DOCUMENT_TAG_NAME,
    "head" => HEAD_TAG_NAME,
};

/// Tag names that denote a component without carrying the prefix.
pub(crate) static RESERVED_TAGS: phf::Set<&'static str> = phf_set! {
    "HTML",
    "HEAD",
};

/// Strips a leading [`COMPONENT_PREFIX`], ignoring ASCII case.
pub(crate) fn strip_component_prefix(name: &str) -> Option<&str> {
    let head = name.get(..COMPONENT_PREFIX.len())?;
    if head.eq_ignore_ascii_case(COMPONENT_PREFIX) {
        Some(&name[COMPONENT_PREFIX.len()..])
    } else {
        None
    }
}
