//! Identifier construction for generated stubs.

/// Uppercase the first character and leave the rest unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the collection holding every instance of `name`.
pub fn collection_name(name: &str, suffix: &str) -> String {
    format!("{name}{suffix}")
}

/// Name of the pairwise check, e.g. `mirrorVsPortal`.
pub fn check_function_name(outer: &str, inner: &str, suffix: &str) -> String {
    format!("{outer}Vs{}{suffix}", capitalize(inner))
}
