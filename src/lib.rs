//! Static site generator for a markdown blog.

mod assets;
pub mod components;
mod config;
mod filters;
mod generators;
mod highlight;
mod markdown;
mod metadata;
pub mod pages;
mod path;
mod posts;
mod shortcodes;
mod util;

pub use assets::{copy_passthrough, write_css_assets, write_script_assets};
pub use config::Config;
pub use filters::{as_iso_date, as_post_date};
pub use generators::{BuildSummary, build_site};
pub use highlight::{available_themes, theme_css};
pub use markdown::{LinkResolver, MarkdownRenderer};
pub use metadata::{Author, SiteMetadata};
pub use posts::{Page, Post, PostError, canonical_url, load_pages, load_posts};
pub use shortcodes::{ShortcodeError, expand, find_post, post_url};
pub use util::{reading_time, slugify};
