//! Conversion of table and column names into exported Go identifiers.
//!
//! Names are split on `_`. Each segment keeps its own casing except for the
//! first character, which is upper-cased, so `testField` becomes `TestField`.
//! The initialisms in [`INITIALISMS`] are fully upper-cased regardless of
//! their input case, following Go naming conventions (`user_id` -> `UserID`).

/// Segments that are written fully upper-case.
const INITIALISMS: &[&str] = &["id", "api", "ip"];

/// Convert a name into an exported identifier.
///
/// # Examples
///
/// ```
/// use table2struct::core::identifier::to_identifier;
///
/// assert_eq!(to_identifier("test_field"), "TestField");
/// assert_eq!(to_identifier("user_id"), "UserID");
/// assert_eq!(to_identifier("testField"), "TestField");
/// ```
pub fn to_identifier(name: &str) -> String {
    name.split('_').map(case_segment).collect()
}

fn case_segment(segment: &str) -> String {
    let lower = segment.to_lowercase();
    if INITIALISMS.contains(&lower.as_str()) {
        return segment.to_uppercase();
    }

    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
