//! Naming inflection between hook directory names and host type names.

/// Converts a snake_case directory name into a CamelCase type name.
///
/// The leading lowercase run is capitalised; every word after an underscore
/// is capitalised with the remainder of its alphanumeric run lowercased.
/// Names that are already CamelCase pass through unchanged.
///
/// ```
/// use entityhooks_core::inflect::camelize;
///
/// assert_eq!(camelize("some_model"), "SomeModel");
/// assert_eq!(camelize("Host"), "Host");
/// ```
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut words = name.split('_');

    if let Some(first) = words.next() {
        let mut chars = first.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {
                out.push(c.to_ascii_uppercase());
                out.extend(chars);
            }
            Some(c) => {
                out.push(c);
                out.extend(chars);
            }
            None => {}
        }
    }

    for word in words {
        let run = word
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(word.len());
        let (head, tail) = word.split_at(run);

        let mut chars = head.chars();
        if let Some(c) = chars.next() {
            out.push(c.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
        out.push_str(tail);
    }

    out
}
