//! Markdown rendering for post and page bodies.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, Plugins};

use super::LinkResolver;
use crate::highlight::ClassHighlighter;

/// Renders post bodies to HTML.
///
/// Bodies are parsed with GitHub Flavored Markdown extensions, link and
/// image destinations are resolved against the page being built, and fenced
/// code is highlighted with `hljs-` classes. One renderer is shared by every
/// page of a build so syntax definitions load once.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: ClassHighlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the blog's markdown options.
    ///
    /// - Tables, strikethrough, autolinks, task lists, footnotes,
    ///   description lists
    /// - Heading anchors with bare ids (`## Setup Steps` gets `setup-steps`)
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML passthrough (posts are trusted content)
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
        options.extension.header_ids = Some(String::new());

        options.parse.smart = true;

        // Posts embed their own HTML (figures, iframes)
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: ClassHighlighter::new(),
        }
    }

    /// Renders markdown to HTML, leaving link destinations as written.
    ///
    /// # Errors
    ///
    /// Returns error if a code block fails to highlight
    pub fn render(&self, content: &str) -> Result<String> {
        self.render_with(content, None)
    }

    /// Renders markdown for the page published at `page_url`.
    ///
    /// Root relative link and image destinations, such as the output of
    /// `{% post_url %}`, become paths relative to the page so the site also
    /// works from the filesystem. Destinations the resolver rejects are kept
    /// as written. Links inside raw HTML are not touched.
    ///
    /// # Errors
    ///
    /// Returns error if a code block fails to highlight
    pub fn render_page(&self, content: &str, page_url: &str) -> Result<String> {
        self.render_with(content, Some(&LinkResolver::new(page_url)))
    }

    fn render_with(&self, content: &str, resolver: Option<&LinkResolver>) -> Result<String> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        if let Some(resolver) = resolver {
            resolve_destinations(root, resolver);
        }

        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.highlighter);

        let mut html = Vec::with_capacity(content.len() * 2);
        comrak::format_html_with_plugins(root, &self.options, &mut html, &plugins)
            .context("Failed to render markdown")?;

        String::from_utf8(html).context("Rendered HTML is not valid UTF-8")
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites link and image destinations in place.
fn resolve_destinations<'a>(root: &'a AstNode<'a>, resolver: &LinkResolver) {
    for node in root.descendants() {
        let mut ast = node.data.borrow_mut();
        if let NodeValue::Link(link) | NodeValue::Image(link) = &mut ast.value
            && let Ok(resolved) = resolver.resolve(&link.url)
        {
            link.url = resolved;
        }
    }
}
