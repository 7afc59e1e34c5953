//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::site_header;
use crate::assets::SCRIPTS;
use crate::metadata::SiteMetadata;
use crate::path::relative_href;

const ICONS_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

/// Site wide data shared by every page of a build.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub metadata: SiteMetadata,
    pub nav: Vec<NavLink>,
}

impl SiteContext {
    pub fn new(metadata: SiteMetadata, nav: Vec<NavLink>) -> Self {
        Self { metadata, nav }
    }
}

/// Per page head information.
pub struct PageHead<'a> {
    /// Site relative URL the page is published at
    pub url: &'a str,
    /// Page title, `None` for the home page
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, head, site header and footer across all page
/// types. Stylesheets and scripts are linked relative to the page URL so the
/// output can be opened straight from disk.
///
/// # Arguments
///
/// * `site`: Site metadata and navigation
/// * `head`: Page URL, title and description
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(site: &SiteContext, head: PageHead<'_>, body: Markup) -> Markup {
    let meta = &site.metadata;
    let title = match head.title {
        Some(title) => format!("{} | {}", title, meta.title),
        None => meta.title.clone(),
    };
    let description = head.description.unwrap_or(&meta.description);
    let canonical = if meta.url.is_empty() {
        None
    } else {
        Some(format!("{}{}", meta.url.trim_end_matches('/'), head.url))
    };

    html! {
        (DOCTYPE)
        html lang=(meta.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                @if !meta.author.name.is_empty() {
                    meta name="author" content=(meta.author.name);
                }
                @if let Some(canonical) = canonical {
                    link rel="canonical" href=(canonical);
                }
                link rel="stylesheet" href=(ICONS_STYLESHEET);
                link rel="stylesheet" href=(relative_href(head.url, "/assets/site.css"));
                link rel="stylesheet" href=(relative_href(head.url, "/assets/highlight.css"));
            }
            body {
                div class="container" {
                    (site_header(site, head.url))
                    main {
                        (body)
                    }
                    (footer(meta))
                }
                @for (name, _) in SCRIPTS {
                    script src=(relative_href(head.url, &format!("/assets/scripts/{}", name))) {}
                }
            }
        }
    }
}
