//! Site build orchestration.

use anyhow::{Context, Result, bail};
use maud::Markup;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::assets::{copy_passthrough, write_css_assets, write_script_assets};
use crate::components::layout::{NavLink, SiteContext};
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::metadata::SiteMetadata;
use crate::pages;
use crate::path::output_file;
use crate::posts::{Page, load_pages, load_posts};

/// Counts reported after a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    pub pages: usize,
    pub tags: usize,
    pub passthrough_files: usize,
}

/// Rendered page waiting to be written.
struct RenderedPage {
    url: String,
    markup: Markup,
}

/// Builds the whole site described by `config`.
///
/// Metadata and the post collection are loaded first. Every page is then
/// rendered in memory against the same immutable collection, and only when
/// all pages rendered successfully are they written to the output
/// directory. A dangling `post_url` therefore fails the build without
/// publishing any page.
///
/// # Errors
///
/// Returns error if content cannot be loaded, any page fails to render, two
/// pages share a URL, or the output cannot be written
///
/// # Examples
///
/// ```no_run
/// use jwio::{Config, build_site};
///
/// let summary = build_site(&Config::new("blog", "_site"))?;
/// println!("{} posts", summary.posts);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_site(config: &Config) -> Result<BuildSummary> {
    let fallback_title = config
        .input
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .unwrap_or_else(|| "Blog".to_string());

    let metadata = SiteMetadata::load(&config.metadata_path(), &fallback_title)
        .context("Failed to load site metadata")?;

    let posts = load_posts(&config.posts_dir(), config.drafts).context("Failed to load posts")?;
    let standalone = load_pages(&config.pages_dir()).context("Failed to load pages")?;

    let site = SiteContext::new(metadata, navigation(&standalone));
    let renderer = MarkdownRenderer::new();

    let mut rendered = Vec::with_capacity(posts.len() + standalone.len() + 2);

    for post in &posts {
        let markup = pages::post::generate(post, &posts, &site, &renderer)
            .with_context(|| format!("Failed to generate post {}", post.url()))?;
        rendered.push(RenderedPage {
            url: post.url().to_string(),
            markup,
        });
    }

    for page in &standalone {
        let markup = pages::page::generate(page, &posts, &site, &renderer)
            .with_context(|| format!("Failed to generate page {}", page.url()))?;
        rendered.push(RenderedPage {
            url: page.url().to_string(),
            markup,
        });
    }

    rendered.push(RenderedPage {
        url: "/".to_string(),
        markup: pages::index::generate(&posts, &site),
    });

    let groups = pages::tags::group_by_tag(&posts);
    rendered.push(RenderedPage {
        url: "/tags/".to_string(),
        markup: pages::tags::generate_list(&groups, &site),
    });
    for group in groups.values() {
        rendered.push(RenderedPage {
            url: group.url.clone(),
            markup: pages::tags::generate_tag(group, &site),
        });
    }

    let targets = output_targets(config, &rendered)?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.assets_dir();
    write_css_assets(&assets_dir, &config.theme).context("Failed to write stylesheets")?;
    write_script_assets(&assets_dir).context("Failed to write scripts")?;

    let mut passthrough_files = 0;
    for dir in &config.passthrough {
        let source = config.passthrough_source(dir);
        match copy_passthrough(&source, &config.output.join(dir))? {
            Some(count) => {
                println!("Copied: {} ({} files)", dir.display(), count);
                passthrough_files += count;
            }
            None => eprintln!(
                "Warning: Passthrough directory not found: {}",
                source.display()
            ),
        }
    }

    for (page, target) in rendered.into_iter().zip(targets) {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&target, page.markup.into_string())
            .with_context(|| format!("Failed to write page {}", target.display()))?;
    }

    let summary = BuildSummary {
        posts: posts.len(),
        pages: standalone.len(),
        tags: groups.len(),
        passthrough_files,
    };

    println!(
        "Generated {} posts, {} pages, {} tag pages in {}",
        summary.posts,
        summary.pages,
        summary.tags,
        config.output.display()
    );

    Ok(summary)
}

/// Header navigation: standalone pages by title, then the tags index.
fn navigation(pages: &[Page]) -> Vec<NavLink> {
    let mut nav: Vec<NavLink> = pages
        .iter()
        .map(|page| NavLink {
            title: page.title().to_string(),
            url: page.url().to_string(),
        })
        .collect();
    nav.sort_by(|a, b| a.title.cmp(&b.title));
    nav.push(NavLink {
        title: "Tags".to_string(),
        url: "/tags/".to_string(),
    });
    nav
}

/// Maps every rendered page to its output file, rejecting collisions.
fn output_targets(config: &Config, rendered: &[RenderedPage]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut targets = Vec::with_capacity(rendered.len());

    for page in rendered {
        let target = output_file(&config.output, &page.url);
        if target.starts_with(config.assets_dir()) {
            bail!("Page URL collides with generated assets: {}", page.url);
        }
        if !seen.insert(target.clone()) {
            bail!("Two pages publish to the same URL: {}", page.url);
        }
        targets.push(target);
    }

    Ok(targets)
}
