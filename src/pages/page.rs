//! Standalone page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::layout::{PageHead, SiteContext, page_wrapper};
use crate::markdown::MarkdownRenderer;
use crate::posts::{Page, Post};
use crate::shortcodes::expand;

/// Generates HTML for a standalone page such as about
///
/// The page body gets an `<name>-page` class so page specific client
/// scripts (the about page opens its links in new tabs) can target it.
///
/// # Errors
///
/// Returns error if shortcode expansion or markdown rendering fails
pub fn generate(
    page: &Page,
    posts: &[Post],
    site: &SiteContext,
    renderer: &MarkdownRenderer<'_>,
) -> Result<Markup> {
    let body = expand(page.body(), posts)
        .with_context(|| format!("Failed to expand shortcodes in {}", page.source().display()))?;

    let content = renderer
        .render_page(&body, page.url())
        .with_context(|| format!("Failed to render markdown in {}", page.source().display()))?;

    Ok(page_wrapper(
        site,
        PageHead {
            url: page.url(),
            title: Some(page.title()),
            description: page.description(),
        },
        html! {
            article class=(format!("page {}-page", page.name())) {
                h1 class="page-title" { (page.title()) }
                (PreEscaped(content))
            }
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::SiteMetadata;
    use std::path::Path;

    #[test]
    fn test_generate_about_page() {
        // Arrange
        let page = Page::parse(
            "---\ntitle: About\n---\nFind me on [GitHub](https://github.com).\n",
            Path::new("pages/about.md"),
        )
        .expect("Should parse");
        let site = SiteContext::new(SiteMetadata::placeholder("Blog"), Vec::new());
        let renderer = MarkdownRenderer::new();

        // Act
        let html = generate(&page, &[], &site, &renderer)
            .expect("Should render")
            .into_string();

        // Assert
        assert!(html.contains("<article class=\"page about-page\">"));
        assert!(html.contains("<title>About | Blog</title>"));
        assert!(html.contains("href=\"https://github.com\""));
    }
}
