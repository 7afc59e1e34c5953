//! Post date and tag components

use maud::{Markup, html};

use crate::filters::{as_iso_date, as_post_date};
use crate::path::relative_href;
use crate::posts::Post;
use crate::util::{reading_time, slugify};

/// Returns the URL of a tag's listing page.
pub fn tag_url(tag: &str) -> String {
    format!("/tags/{}/", slugify(tag))
}

/// Renders tag pills linking to tag pages
pub fn tag_list(tags: &[String], page_url: &str) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="tag-list" {
                @for tag in tags {
                    li {
                        a class="tag no-target" href=(relative_href(page_url, &tag_url(tag))) { (tag) }
                    }
                }
            }
        }
    }
}

/// Renders the date, reading time and tags line under a post title
///
/// # Arguments
///
/// * `post`: Post being described
/// * `page_url`: URL of the page the markup is placed on
pub fn post_meta(post: &Post, page_url: &str) -> Markup {
    html! {
        div class="post-meta" {
            time datetime=(as_iso_date(post.date())) { (as_post_date(post.date())) }
            " · "
            span class="reading-time" { (reading_time(post.body())) }
            (tag_list(post.tags(), page_url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_tag_url_slugified() {
        assert_eq!(tag_url("ASP.NET Core"), "/tags/asp-net-core/");
    }

    #[test]
    fn test_post_meta_renders_date_and_tags() {
        // Arrange
        let date = NaiveDate::from_ymd_opt(2021, 3, 4).expect("valid date");
        let post = Post::new("hello-world", "Hello", date)
            .with_tags(vec!["dotnet".to_string()])
            .with_body("a few words");

        // Act
        let html = post_meta(&post, "/posts/hello-world/").into_string();

        // Assert
        assert!(html.contains("<time datetime=\"2021-03-04\">Mar 4, 2021</time>"));
        assert!(html.contains("1 min read"));
        assert!(html.contains("href=\"../../tags/dotnet/index.html\""));
    }

    #[test]
    fn test_tag_list_empty() {
        // Arrange & Act
        let html = tag_list(&[], "/").into_string();

        // Assert
        assert!(html.is_empty());
    }
}
