//! Post page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::layout::{PageHead, SiteContext, page_wrapper};
use crate::components::post_meta::post_meta;
use crate::markdown::MarkdownRenderer;
use crate::path::relative_href;
use crate::posts::Post;
use crate::shortcodes::expand;

/// Generates HTML page for a single post
///
/// Expands shortcodes in the post body against the post collection, renders
/// the markdown, and wraps it with title, date line and links to the
/// neighbouring posts in collection order.
///
/// # Arguments
///
/// * `post`: Post to render
/// * `posts`: Full post collection, used for `post_url` and neighbours
/// * `site`: Site metadata and navigation
/// * `renderer`: Shared markdown renderer
///
/// # Returns
///
/// HTML markup ready for writing to disk
///
/// # Errors
///
/// Returns error if a shortcode fails (for example a `post_url` naming a
/// missing post) or markdown rendering fails
pub fn generate(
    post: &Post,
    posts: &[Post],
    site: &SiteContext,
    renderer: &MarkdownRenderer<'_>,
) -> Result<Markup> {
    let body = expand(post.body(), posts)
        .with_context(|| format!("Failed to expand shortcodes in {}", post.source().display()))?;

    let content = renderer
        .render_page(&body, post.url())
        .with_context(|| format!("Failed to render markdown in {}", post.source().display()))?;

    let (previous, next) = neighbours(post, posts);
    let url = post.url();

    Ok(page_wrapper(
        site,
        PageHead {
            url,
            title: Some(post.title()),
            description: post.description(),
        },
        html! {
            article {
                h1 class="post-title" { (post.title()) }
                (post_meta(post, url))
                div class="post" {
                    (PreEscaped(content))
                }
            }
            @if previous.is_some() || next.is_some() {
                nav class="post-nav" {
                    @if let Some(previous) = previous {
                        a class="post-nav-previous no-target" href=(relative_href(url, previous.url())) {
                            "← " (previous.title())
                        }
                    }
                    @if let Some(next) = next {
                        a class="post-nav-next no-target" href=(relative_href(url, next.url())) {
                            (next.title()) " →"
                        }
                    }
                }
            }
        },
    ))
}

/// Finds the posts before and after `post` in collection order.
fn neighbours<'a>(post: &Post, posts: &'a [Post]) -> (Option<&'a Post>, Option<&'a Post>) {
    let Some(index) = posts.iter().position(|p| p.url() == post.url()) else {
        return (None, None);
    };

    let previous = index.checked_sub(1).and_then(|i| posts.get(i));
    let next = posts.get(index + 1);
    (previous, next)
}
