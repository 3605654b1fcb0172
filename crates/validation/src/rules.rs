//! Small shared checks used by the per-entity validators.

/// Character class shared by student and staff names: letters, spaces,
/// hyphens, apostrophes and periods only.
pub(crate) fn is_person_name(value: &str) -> bool {
    !value.trim().is_empty()
        && value
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'))
}

/// Three ASCII letters followed by three ASCII digits, e.g. `CSE452`.
pub(crate) fn is_course_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6
        && bytes[..3].iter().all(u8::is_ascii_alphabetic)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Treats absent, empty and whitespace-only values as "field not supplied".
/// Update payloads use this to express "do not change".
pub(crate) fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
