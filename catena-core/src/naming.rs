//! Translation between logical component names and DOM tag names.
//!
//! A regular component `widget` is rendered as `<CAT-WIDGET>`; the reserved
//! components `document` and `head` are rendered as `<HTML>` and `<HEAD>`.

use crate::{
    conventions::{
        COMPONENT_ERROR_TEMPLATE_POSTFIX, COMPONENT_PREFIX, DOCUMENT_COMPONENT_NAME,
        DOCUMENT_ELEMENT_NAME, HEAD_COMPONENT_NAME, RESERVED_TAG_NAMES, strip_component_prefix,
    },
    input::{AsName, with_name},
};

/// Name of the error template of a component.
///
/// Returns an empty string when `component_name` is not a string.
pub fn error_template_name<N: AsName + ?Sized>(component_name: &N) -> String {
    with_name(component_name, |name| {
        format!("{name}{COMPONENT_ERROR_TEMPLATE_POSTFIX}")
    })
}

/// Whether `component_name` names the `document` component, ignoring case.
pub fn is_document_component(component_name: &str) -> bool {
    component_name.to_lowercase() == DOCUMENT_COMPONENT_NAME
}

/// Whether `component_name` names the `head` component, ignoring case.
pub fn is_head_component(component_name: &str) -> bool {
    component_name.to_lowercase() == HEAD_COMPONENT_NAME
}

/// Logical component name for a tag name (or an already logical name).
///
/// The input is lowercased first. `head` is returned as is, `document` and
/// the root element name `html` both yield `document`, and any other name
/// loses a leading `cat-` prefix if it has one.
pub fn original_component_name<N: AsName + ?Sized>(full_component_name: &N) -> String {
    with_name(full_component_name, |full| {
        let lowered = full.to_lowercase();
        if lowered == HEAD_COMPONENT_NAME {
            return lowered;
        }
        if lowered == DOCUMENT_COMPONENT_NAME || lowered == DOCUMENT_ELEMENT_NAME {
            return DOCUMENT_COMPONENT_NAME.to_owned();
        }
        match strip_component_prefix(&lowered) {
            Some(rest) => rest.to_owned(),
            None => lowered,
        }
    })
}

/// Tag name a component is rendered as.
///
/// Reserved names are matched exactly: `head` becomes `HEAD` and `document`
/// becomes `HTML`. Every other name is uppercased behind `CAT-`.
pub fn tag_name_for_component<N: AsName + ?Sized>(component_name: &N) -> String {
    with_name(component_name, |name| match RESERVED_TAG_NAMES.get(name) {
        Some(tag) => (*tag).to_owned(),
        None => format!(
            "{}{}",
            COMPONENT_PREFIX.to_uppercase(),
            name.to_uppercase()
        ),
    })
}
