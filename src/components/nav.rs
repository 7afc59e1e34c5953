//! Site header navigation component

use maud::{Markup, html};

use super::layout::SiteContext;
use crate::path::relative_href;

/// Renders the site header with title and navigation links
///
/// The site title links home; navigation entries are standalone pages plus
/// the tags index. The entry matching the current page is marked with
/// `aria-current`.
///
/// # Arguments
///
/// * `site`: Site metadata and navigation
/// * `page_url`: URL of the page being rendered
///
/// # Returns
///
/// Header markup with page relative links
pub fn site_header(site: &SiteContext, page_url: &str) -> Markup {
    html! {
        header class="site-header" {
            a href=(relative_href(page_url, "/")) class="site-title" { (site.metadata.title) }
            nav class="site-nav" {
                @for link in &site.nav {
                    @if link.url == page_url {
                        a href=(relative_href(page_url, &link.url)) aria-current="page" { (link.title) }
                    } @else {
                        a href=(relative_href(page_url, &link.url)) { (link.title) }
                    }
                }
            }
        }
    }
}
