//! Camel-case method names.

/// Builds a method name from `prefix` and a possibly punctuated `name`.
///
/// `name` is split on every character outside `[a-zA-Z0-9]`; empty pieces
/// are skipped. Each piece is appended with its first character uppercased,
/// except when nothing has been written yet (empty `prefix`), in which case
/// the first character is lowercased. The rest of each piece is kept as is.
///
/// An empty `name` always yields an empty string, whatever the prefix.
///
/// ```
/// use catena_core::camel_case_name;
///
/// assert_eq!(camel_case_name("handle", "click-event"), "handleClickEvent");
/// assert_eq!(camel_case_name("", "my-thing"), "myThing");
/// assert_eq!(camel_case_name("handle", ""), "");
/// ```
pub fn camel_case_name(prefix: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let mut camel = String::with_capacity(prefix.len() + name.len());
    camel.push_str(prefix);

    let parts = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty());
    for part in parts {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        // the method name itself always starts lowercase
        if camel.is_empty() {
            camel.push(first.to_ascii_lowercase());
        } else {
            camel.push(first.to_ascii_uppercase());
        }
        camel.push_str(chars.as_str());
    }

    camel
}
