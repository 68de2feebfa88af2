/// A required text value is missing when it is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The password and its confirmation must match exactly (no trimming).
pub fn passwords_differ(password: &str, confirm: &str) -> bool {
    password != confirm
}

/// A select value is missing when it is blank, the placeholder option,
/// or something `known` does not recognise.
pub fn is_unselected(value: &str, placeholder: &str, known: impl Fn(&str) -> bool) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == placeholder || !known(trimmed)
}
