//! Field identifier to lookup key translation

/// Convert a hump-case identifier into a lowercase, underscore-joined key.
///
/// Segments are split only where an uppercase letter follows a lowercase run,
/// so consecutive capitals stay together: `IpAddress` becomes `ip_address`,
/// `ID` becomes `id` and `NInfo` becomes `ninfo`. Input that is already
/// snake_case comes back unchanged.
pub fn camel_to_snake(ident: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut in_lower_run = ident
        .chars()
        .next()
        .map(|c| !c.is_ascii_uppercase())
        .unwrap_or(false);
    let mut start = 0;

    for (i, c) in ident.char_indices().skip(1) {
        if c.is_ascii_uppercase() {
            if in_lower_run {
                segments.push(&ident[start..i]);
                start = i;
            }
            in_lower_run = false;
        } else if c.is_ascii_lowercase() {
            in_lower_run = true;
        }
    }
    if start < ident.len() {
        segments.push(&ident[start..]);
    }

    segments.join("_").to_lowercase()
}

/// Translate like [`camel_to_snake`] then uppercase, for environment-style keys
pub fn upper_snake(ident: &str) -> String {
    camel_to_snake(ident).to_uppercase()
}
