//! Page footer component

use maud::{Markup, html};

use crate::metadata::SiteMetadata;

/// Renders the site footer with author attribution
pub fn footer(meta: &SiteMetadata) -> Markup {
    html! {
        footer {
            p {
                @if !meta.author.name.is_empty() {
                    "© "
                    @if meta.author.url.is_empty() {
                        (meta.author.name)
                    } @else {
                        a href=(meta.author.url) class="no-target" { (meta.author.name) }
                    }
                    @if !meta.author.email.is_empty() {
                        " · "
                        a href=(format!("mailto:{}", meta.author.email)) { (meta.author.email) }
                    }
                    " · "
                }
                "Built with jwio"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_with_author() {
        // Arrange
        let mut meta = SiteMetadata::placeholder("Blog");
        meta.author.name = "Jeremy Wells".to_string();
        meta.author.email = "hi@jeremywells.io".to_string();

        // Act
        let html = footer(&meta).into_string();

        // Assert
        assert!(html.contains("Jeremy Wells"));
        assert!(html.contains("mailto:hi@jeremywells.io"));
    }

    #[test]
    fn test_footer_without_author() {
        // Arrange
        let meta = SiteMetadata::placeholder("Blog");

        // Act
        let html = footer(&meta).into_string();

        // Assert
        assert_eq!(html, "<footer><p>Built with jwio</p></footer>");
    }
}
