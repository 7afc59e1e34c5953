//! Post and page records loaded from markdown sources.
//!
//! Each source file starts with a YAML front matter block fenced by `---`
//! lines followed by the markdown body. Posts are collected once per build
//! into an ordered collection that rendering code only borrows.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// URL prefix under which posts are published.
pub const POSTS_URL_PREFIX: &str = "/posts/";

/// Errors raised while reading post and page sources.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("missing front matter in {}", .0.display())]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in {}", .path.display())]
    InvalidFrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid slug {slug:?} in {}", .path.display())]
    InvalidSlug { slug: String, path: PathBuf },

    #[error("invalid permalink {permalink:?} in {}", .path.display())]
    InvalidPermalink { permalink: String, path: PathBuf },

    #[error("duplicate url {url} in {} and {}", .first.display(), .second.display())]
    DuplicateUrl {
        url: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Builds the canonical URL of a post slug: `/posts/<slug>/`.
pub fn canonical_url(slug: &str) -> String {
    format!("{POSTS_URL_PREFIX}{slug}/")
}

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    url: String,
    slug: String,
    title: String,
    date: NaiveDate,
    tags: Vec<String>,
    description: Option<String>,
    body: String,
    source: PathBuf,
}

impl Post {
    /// Creates a post published at its canonical URL with an empty body.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        let slug = slug.into();
        Self {
            url: canonical_url(&slug),
            slug,
            title: title.into(),
            date,
            tags: Vec::new(),
            description: None,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    /// Overrides the published URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses a post from markdown source with front matter.
    ///
    /// Returns `Ok(None)` for drafts unless `include_drafts` is set.
    ///
    /// # Errors
    ///
    /// Returns [`PostError`] if front matter is missing or malformed, or the
    /// slug or permalink is unusable as a URL path.
    pub fn parse(
        source: &str,
        path: &Path,
        include_drafts: bool,
    ) -> std::result::Result<Option<Self>, PostError> {
        let (yaml, body) = split_front_matter(source)
            .ok_or_else(|| PostError::MissingFrontMatter(path.to_path_buf()))?;

        let front: PostFrontMatter =
            serde_yaml::from_str(yaml).map_err(|source| PostError::InvalidFrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        if front.draft && !include_drafts {
            return Ok(None);
        }

        let slug = match front.slug {
            Some(slug) => slug,
            None => file_stem(path),
        };
        if !is_valid_slug(&slug) {
            return Err(PostError::InvalidSlug {
                slug,
                path: path.to_path_buf(),
            });
        }

        let url = match front.permalink {
            Some(permalink) => normalize_permalink(&permalink).ok_or_else(|| {
                PostError::InvalidPermalink {
                    permalink,
                    path: path.to_path_buf(),
                }
            })?,
            None => canonical_url(&slug),
        };

        Ok(Some(Self {
            url,
            slug,
            title: front.title,
            date: front.date,
            tags: front.tags,
            description: front.description,
            body: body.to_string(),
            source: path.to_path_buf(),
        }))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Markdown body after the front matter block.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Standalone page record (about, uses, etc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    name: String,
    url: String,
    title: String,
    description: Option<String>,
    body: String,
    source: PathBuf,
}

impl Page {
    /// Parses a page from markdown source with front matter.
    ///
    /// # Errors
    ///
    /// Returns [`PostError`] if front matter is missing or malformed.
    pub fn parse(source: &str, path: &Path) -> std::result::Result<Self, PostError> {
        let (yaml, body) = split_front_matter(source)
            .ok_or_else(|| PostError::MissingFrontMatter(path.to_path_buf()))?;

        let front: PageFrontMatter =
            serde_yaml::from_str(yaml).map_err(|source| PostError::InvalidFrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        let name = file_stem(path);
        if !is_valid_slug(&name) {
            return Err(PostError::InvalidSlug {
                slug: name,
                path: path.to_path_buf(),
            });
        }

        let url = match front.permalink {
            Some(permalink) => normalize_permalink(&permalink).ok_or_else(|| {
                PostError::InvalidPermalink {
                    permalink,
                    path: path.to_path_buf(),
                }
            })?,
            None => format!("/{name}/"),
        };

        Ok(Self {
            name,
            url,
            title: front.title,
            description: front.description,
            body: body.to_string(),
            source: path.to_path_buf(),
        })
    }

    /// File stem the page was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[derive(Debug, Deserialize)]
struct PostFrontMatter {
    title: String,
    date: NaiveDate,
    #[serde(default, deserialize_with = "string_or_seq")]
    tags: Vec<String>,
    description: Option<String>,
    slug: Option<String>,
    permalink: Option<String>,
    #[serde(default)]
    draft: bool,
}

#[derive(Debug, Deserialize)]
struct PageFrontMatter {
    title: String,
    description: Option<String>,
    permalink: Option<String>,
}

/// Accepts `tags: rust` as well as `tags: [rust, cli]`.
fn string_or_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(tag) => vec![tag],
        OneOrMany::Many(tags) => tags,
    })
}

/// Splits source into front matter YAML and body.
///
/// The first line must be exactly `---`; the block ends at the next line
/// that is exactly `---`.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Slugs become a single URL path segment.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_whitespace)
}

/// Normalizes a permalink to `/a/b/` form, rejecting traversal.
fn normalize_permalink(permalink: &str) -> Option<String> {
    let segments: Vec<&str> = permalink.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() || segments.iter().any(|s| *s == ".." || *s == ".") {
        return None;
    }
    Some(format!("/{}/", segments.join("/")))
}

/// Lists markdown files under a directory in path order.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Loads the post collection from a directory of markdown files.
///
/// Posts are ordered by date, then slug. Drafts are skipped unless
/// `include_drafts` is set. A missing directory yields an empty collection.
///
/// # Errors
///
/// Returns error if a file cannot be read or parsed, or two posts share a URL.
pub fn load_posts(dir: &Path, include_drafts: bool) -> Result<Vec<Post>> {
    let mut posts = Vec::new();

    for path in markdown_files(dir)? {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post: {}", path.display()))?;

        if let Some(post) = Post::parse(&source, &path, include_drafts)? {
            posts.push(post);
        }
    }

    posts.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.slug.cmp(&b.slug)));

    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for post in &posts {
        if let Some(first) = seen.insert(post.url.as_str(), post.source.as_path()) {
            return Err(PostError::DuplicateUrl {
                url: post.url.clone(),
                first: first.to_path_buf(),
                second: post.source.clone(),
            }
            .into());
        }
    }

    Ok(posts)
}

/// Loads standalone pages from a directory of markdown files.
///
/// # Errors
///
/// Returns error if a file cannot be read or parsed.
pub fn load_pages(dir: &Path) -> Result<Vec<Page>> {
    markdown_files(dir)?
        .into_iter()
        .map(|path| -> Result<Page> {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read page: {}", path.display()))?;
            Ok(Page::parse(&source, &path)?)
        })
        .collect()
}
