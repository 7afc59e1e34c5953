//! Utility functions for jwio

/// Words per minute used for reading time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Converts arbitrary text to a URL path segment.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single hyphen. Non ASCII letters are kept as is.
///
/// # Arguments
///
/// * `text`: Text to convert (tag name, title)
///
/// # Returns
///
/// Slug without leading or trailing hyphens
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Estimates reading time in whole minutes, at least one.
///
/// # Arguments
///
/// * `markdown`: Post body
///
/// # Returns
///
/// Formatted string like "3 min read"
pub fn reading_time(markdown: &str) -> String {
    let words = markdown.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
