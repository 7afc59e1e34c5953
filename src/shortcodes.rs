//! Template shortcodes available to post and page bodies.
//!
//! Bodies are markdown templates. Before markdown rendering, shortcode tags
//! of the form `{% name "argument" %}` are expanded in place:
//!
//! - `{% post_url "slug" %}` resolves a post slug to its canonical URL
//! - `{% raw %} ... {% endraw %}` emits its content without expansion
//!
//! A `-` just inside the delimiters (`{%-`, `-%}`) trims the whitespace
//! before or after the tag. Unknown tags pass through untouched so other
//! template syntax survives.

use thiserror::Error;

use crate::posts::{Post, canonical_url};

const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";

/// Shortcode expansion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcodeError {
    /// No post in the collection is published at `/posts/<slug>/`.
    #[error("post not found for slug {slug:?}")]
    PostNotFound { slug: String },

    /// Shortcode argument is missing, unquoted, or not a usable slug.
    #[error("invalid shortcode arguments in `{tag}`")]
    InvalidArgument { tag: String },
}

/// Finds the post published at the canonical URL of `slug`.
///
/// Scans `posts` in collection order and returns the first record whose URL
/// equals `/posts/<slug>/`. If several records share that URL the first one
/// wins.
///
/// # Errors
///
/// Returns [`ShortcodeError::PostNotFound`] carrying `slug` when no record
/// matches.
pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> Result<&'a Post, ShortcodeError> {
    let candidate = canonical_url(slug);
    posts
        .iter()
        .find(|post| post.url() == candidate)
        .ok_or_else(|| ShortcodeError::PostNotFound {
            slug: slug.to_string(),
        })
}

/// Resolves a post slug to its canonical site relative URL.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use jwio::{Post, post_url};
///
/// let date = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
/// let posts = vec![Post::new("hello-world", "Hello", date)];
///
/// assert_eq!(post_url(&posts, "hello-world")?, "/posts/hello-world/");
/// assert!(post_url(&posts, "missing-slug").is_err());
/// # Ok::<(), jwio::ShortcodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`ShortcodeError::PostNotFound`] when no post matches.
pub fn post_url<'a>(posts: &'a [Post], slug: &str) -> Result<&'a str, ShortcodeError> {
    find_post(posts, slug).map(Post::url)
}

/// Expands shortcodes in a template body.
///
/// # Errors
///
/// Returns the first [`ShortcodeError`] raised by a tag. Expansion stops at
/// that point and no partial output is returned.
pub fn expand(template: &str, posts: &[Post]) -> Result<String, ShortcodeError> {
    let mut result = String::with_capacity(template.len());
    let mut pos = 0;

    while let Some(open) = template[pos..].find(TAG_OPEN) {
        let tag_start = pos + open;

        let Some(tag) = parse_tag(template, tag_start) else {
            // Unterminated tag, keep the rest verbatim
            break;
        };

        let preceding = &template[pos..tag_start];

        match tag.name {
            "post_url" => {
                let slug = quoted_slug(tag.args).ok_or_else(|| ShortcodeError::InvalidArgument {
                    tag: tag.source.to_string(),
                })?;
                result.push_str(tag.leading(preceding));
                result.push_str(post_url(posts, slug)?);
                pos = tag.content_end(template);
            }
            "raw" => {
                result.push_str(tag.leading(preceding));
                let content_start = tag.content_end(template);
                match find_named_tag(template, tag.end, "endraw") {
                    Some(end_tag) => {
                        let content = &template[content_start..end_tag.start];
                        result.push_str(end_tag.leading(content));
                        pos = end_tag.content_end(template);
                    }
                    None => {
                        result.push_str(&template[content_start..]);
                        pos = template.len();
                    }
                }
            }
            _ => {
                result.push_str(preceding);
                result.push_str(tag.source);
                pos = tag.end;
            }
        }
    }

    result.push_str(&template[pos..]);
    Ok(result)
}

/// Parsed `{% ... %}` tag.
struct Tag<'a> {
    name: &'a str,
    args: &'a str,
    source: &'a str,
    start: usize,
    end: usize,
    /// `{%-`: trim whitespace before the tag
    trim_before: bool,
    /// `-%}`: trim whitespace after the tag
    trim_after: bool,
}

impl Tag<'_> {
    /// Text before the tag, right trimmed for `{%-`.
    fn leading<'t>(&self, text: &'t str) -> &'t str {
        if self.trim_before {
            text.trim_end()
        } else {
            text
        }
    }

    /// Offset where the text after the tag resumes, past whitespace for `-%}`.
    fn content_end(&self, template: &str) -> usize {
        if self.trim_after {
            let rest = &template[self.end..];
            self.end + (rest.len() - rest.trim_start().len())
        } else {
            self.end
        }
    }
}

/// Parses the tag opening at `start`, or `None` if it is never closed.
fn parse_tag(template: &str, start: usize) -> Option<Tag<'_>> {
    let inner_start = start + TAG_OPEN.len();
    let close = template[inner_start..].find(TAG_CLOSE)?;
    let inner_end = inner_start + close;
    let end = inner_end + TAG_CLOSE.len();

    let inner = &template[inner_start..inner_end];
    let (trim_before, inner) = match inner.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let (trim_after, inner) = match inner.strip_suffix('-') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    let inner = inner.trim();

    let (name, args) = match inner.find(char::is_whitespace) {
        Some(split) => (&inner[..split], inner[split..].trim()),
        None => (inner, ""),
    };

    Some(Tag {
        name,
        args,
        source: &template[start..end],
        start,
        end,
        trim_before,
        trim_after,
    })
}

/// Finds the next tag named `name` at or after `from`.
fn find_named_tag<'a>(template: &'a str, from: usize, name: &str) -> Option<Tag<'a>> {
    let mut pos = from;
    while let Some(open) = template[pos..].find(TAG_OPEN) {
        let tag = parse_tag(template, pos + open)?;
        if tag.name == name {
            return Some(tag);
        }
        pos = tag.end;
    }
    None
}

/// Extracts a single quoted slug argument.
fn quoted_slug(args: &str) -> Option<&str> {
    let quote = args.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &args[1..];
    let close = rest.find(quote)?;
    let slug = &rest[..close];

    if !rest[close + 1..].trim().is_empty() {
        return None;
    }
    if slug.is_empty() || slug.contains('/') || slug.chars().any(char::is_whitespace) {
        return None;
    }

    Some(slug)
}
