//! Navigation path normalization.
//!
//! Incoming navigation paths arrive in whatever shape the address bar or a
//! link produced: trailing slashes, doubled slashes, or completely empty.
//! Matching operates on the normalized form so that `/bikes/`, `//bikes` and
//! `/bikes` all resolve to the same binding.

/// Normalizes a navigation path to canonical form.
///
/// - collapses repeated slashes (`/bikes//42` -> `/bikes/42`)
/// - strips trailing slashes (`/bikes/` -> `/bikes`)
/// - maps the empty path to `/`
///
/// # Examples
///
/// ```
/// use spoke_router::path::normalize;
///
/// assert_eq!(normalize("/bikes/"), "/bikes");
/// assert_eq!(normalize(""), "/");
/// assert_eq!(normalize("//bikes//42"), "/bikes/42");
/// ```
pub fn normalize(path: &str) -> String {
    let segments: Vec<&str> = segments(path).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Iterates over the non-empty segments of a path.
///
/// Filtering empty segments is what makes a trailing slash irrelevant and
/// guarantees a parameter can never bind to an empty value.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
