//! Home page generation

use maud::{Markup, html};

use crate::components::layout::{PageHead, SiteContext, page_wrapper};
use crate::components::post_list::post_list;
use crate::posts::Post;

/// Generates the home page listing every post, newest first
pub fn generate(posts: &[Post], site: &SiteContext) -> Markup {
    page_wrapper(
        site,
        PageHead {
            url: "/",
            title: None,
            description: None,
        },
        html! {
            @if !site.metadata.description.is_empty() {
                p class="site-description" { (site.metadata.description) }
            }
            section class="posts" {
                h2 { "Posts" }
                (post_list(posts.iter().rev(), "/"))
            }
        },
    )
}
