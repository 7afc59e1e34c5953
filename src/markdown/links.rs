//! Link resolution for site root relative references.

use anyhow::{Result, bail};
use std::path::{Component, Path};

use crate::path::relative_href;

/// Rewrites site root relative links to page relative ones.
///
/// Post bodies link to other posts with root relative URLs such as
/// `/posts/hello-world/` (usually produced by the `post_url` shortcode).
/// Generated pages are written as `<url>/index.html`, so those links are
/// rewritten relative to the page being rendered to keep the output
/// browsable without a web server.
pub struct LinkResolver {
    page_url: String,
}

impl LinkResolver {
    /// Creates link resolver for the page published at `page_url`.
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
        }
    }

    /// Resolves link relative to the current page.
    ///
    /// Handles different link types:
    /// - Absolute URLs (http://, https://, mailto:) remain unchanged
    /// - Protocol relative URLs (//cdn) remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Page relative paths (images/x.png) remain unchanged
    /// - Root relative paths (/posts/a/) resolve to ../posts/a/index.html
    ///
    /// Directory links gain `index.html`; images keep their file path.
    ///
    /// # Errors
    ///
    /// Returns error if a root relative path escapes the site root
    pub fn resolve(&self, link: &str) -> Result<String> {
        if link.is_empty()
            || link.starts_with('#')
            || link.starts_with("//")
            || link.contains("://")
            || link.starts_with("mailto:")
            || !link.starts_with('/')
        {
            return Ok(link.to_string());
        }

        let (path, suffix) = match link.find(['#', '?']) {
            Some(split) => link.split_at(split),
            None => (link, ""),
        };

        for component in Path::new(path).components() {
            if matches!(component, Component::ParentDir) {
                bail!("Path escapes site root: {}", link);
            }
        }

        let mut resolved = relative_href(&self.page_url, path);
        resolved.push_str(suffix);
        Ok(resolved)
    }
}
