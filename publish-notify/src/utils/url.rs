//! URL helpers.

/// Strips trailing `/` characters from a base URL.
pub fn trim_base_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

/// Joins a site base URL and an absolute path.
///
/// Exactly one `/` separates the two parts regardless of how either side is
/// written.
pub fn site_link(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        trim_base_url(base),
        path.trim_start_matches('/')
    )
}
