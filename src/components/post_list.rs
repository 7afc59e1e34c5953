//! Post listing components

use maud::{Markup, html};

use super::post_meta::post_meta;
use crate::path::relative_href;
use crate::posts::Post;

/// Renders a list of posts in the given order
///
/// Each entry shows the linked title, date line and description. Empty
/// input renders an empty state paragraph instead of an empty list.
///
/// # Arguments
///
/// * `posts`: Posts to list, already ordered
/// * `page_url`: URL of the page the list is placed on
///
/// # Returns
///
/// Post list markup
pub fn post_list<'a>(posts: impl IntoIterator<Item = &'a Post>, page_url: &str) -> Markup {
    let posts: Vec<&Post> = posts.into_iter().collect();

    html! {
        @if posts.is_empty() {
            p class="empty-state" { "No posts yet." }
        } @else {
            ul class="post-list" {
                @for post in &posts {
                    li class="post-list-item" {
                        a class="post-list-title" href=(relative_href(page_url, post.url())) {
                            (post.title())
                        }
                        (post_meta(post, page_url))
                        @if let Some(description) = post.description() {
                            p class="post-description" { (description) }
                        }
                    }
                }
            }
        }
    }
}
