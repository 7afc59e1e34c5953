//! Path utilities for HTML generation

use std::path::{Path, PathBuf};

/// Calculates relative path depth for a page URL.
///
/// Pages are written as `<url>/index.html`, so a page at `/posts/hello/`
/// sits two directories below the site root.
///
/// # Arguments
///
/// * `url`: Site relative page URL (`/`, `/about/`, `/posts/slug/`)
///
/// # Returns
///
/// Number of directory levels needed to traverse back to root
pub fn calculate_depth(url: &str) -> usize {
    url.split('/').filter(|s| !s.is_empty()).count()
}

/// Returns the `../` prefix leading from a page URL back to the site root.
///
/// The site root itself gets `./` so joined paths stay relative.
pub fn root_prefix(url: &str) -> String {
    match calculate_depth(url) {
        0 => "./".to_string(),
        depth => "../".repeat(depth),
    }
}

/// Rewrites a site relative URL to be relative to the page at `from`.
///
/// `/posts/a/` seen from `/about/` becomes `../posts/a/index.html` so links
/// keep working when the output is opened from disk.
pub fn relative_href(from: &str, to: &str) -> String {
    let target = to.trim_start_matches('/');
    let mut href = root_prefix(from);
    href.push_str(target);
    if target.is_empty() || target.ends_with('/') {
        href.push_str("index.html");
    }
    href
}

/// Returns the output file for a page URL.
pub fn output_file(output: &Path, url: &str) -> PathBuf {
    url.split('/')
        .filter(|s| !s.is_empty())
        .fold(output.to_path_buf(), |path, segment| path.join(segment))
        .join("index.html")
}
