//! Tag listing and detail page generation

use maud::{Markup, html};
use std::collections::BTreeMap;

use crate::components::layout::{PageHead, SiteContext, page_wrapper};
use crate::components::post_list::post_list;
use crate::components::post_meta::tag_url;
use crate::path::relative_href;
use crate::posts::Post;
use crate::util::slugify;

/// Posts sharing a tag.
#[derive(Debug)]
pub struct TagGroup<'a> {
    /// Tag as first written in front matter
    pub name: String,
    pub url: String,
    /// Posts in collection order
    pub posts: Vec<&'a Post>,
}

/// Groups posts by tag slug
///
/// Tags differing only in case or punctuation (`ASP.NET`, `asp-net`) share
/// one page. Tags that slugify to nothing are ignored.
///
/// # Returns
///
/// Groups keyed by tag slug, in slug order
pub fn group_by_tag(posts: &[Post]) -> BTreeMap<String, TagGroup<'_>> {
    let mut groups: BTreeMap<String, TagGroup<'_>> = BTreeMap::new();

    for post in posts {
        for tag in post.tags() {
            let slug = slugify(tag);
            if slug.is_empty() {
                continue;
            }

            let group = groups.entry(slug).or_insert_with(|| TagGroup {
                name: tag.clone(),
                url: tag_url(tag),
                posts: Vec::new(),
            });

            if !group.posts.iter().any(|p| p.url() == post.url()) {
                group.posts.push(post);
            }
        }
    }

    groups
}

/// Generates the tags listing page
///
/// Displays every tag with its post count, alphabetically by slug.
pub fn generate_list(groups: &BTreeMap<String, TagGroup<'_>>, site: &SiteContext) -> Markup {
    let url = "/tags/";

    page_wrapper(
        site,
        PageHead {
            url,
            title: Some("Tags"),
            description: None,
        },
        html! {
            h1 class="page-title" { "Tags" }
            @if groups.is_empty() {
                p class="empty-state" { "No tags yet." }
            } @else {
                ul class="tag-index" {
                    @for group in groups.values() {
                        li {
                            a class="tag" href=(relative_href(url, &group.url)) { (group.name) }
                            " "
                            span class="tag-count" { "(" (group.posts.len()) ")" }
                        }
                    }
                }
            }
        },
    )
}

/// Generates the page listing posts with one tag, newest first
pub fn generate_tag(group: &TagGroup<'_>, site: &SiteContext) -> Markup {
    let title = format!("Posts tagged \"{}\"", group.name);

    page_wrapper(
        site,
        PageHead {
            url: &group.url,
            title: Some(&title),
            description: None,
        },
        html! {
            h1 class="page-title" { (title) }
            (post_list(group.posts.iter().rev().copied(), &group.url))
            p {
                a href=(relative_href(&group.url, "/tags/")) { "All tags" }
            }
        },
    )
}
