//! Integration tests for jwio.
//!
//! Tests full site builds against temporary blog sources.

mod common;

use anyhow::Result;
use common::{create_test_site, write_file};
use jwio::{Config, build_site, load_posts, post_url};
use std::fs;
use tempfile::TempDir;

/// Tests a complete build writes every page, asset and passthrough file.
#[test]
fn test_build_site_generates_all_pages() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path().join("_site"));

    // Act
    let summary = build_site(&config)?;

    // Assert
    assert_eq!(summary.posts, 2);
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.tags, 2);
    assert_eq!(summary.passthrough_files, 1);

    let out = &config.output;
    for file in [
        "index.html",
        "posts/hello-world/index.html",
        "posts/second-post/index.html",
        "about/index.html",
        "tags/index.html",
        "tags/dotnet/index.html",
        "tags/angular/index.html",
        "assets/site.css",
        "assets/highlight.css",
        "assets/scripts/copy-code-block.js",
        "static/img/logo.svg",
    ] {
        assert!(out.join(file).exists(), "Missing output file: {}", file);
    }

    Ok(())
}

/// Tests the post_url shortcode resolves into a working relative link.
#[test]
fn test_build_site_resolves_post_url() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path());

    // Act
    build_site(&config)?;

    // Assert
    let html = fs::read_to_string(output.path().join("posts/second-post/index.html"))?;
    assert!(
        html.contains("href=\"../../posts/hello-world/index.html\">the first post</a>"),
        "Should resolve post link: {}",
        html
    );
    assert!(html.contains("Apr 1, 2021"), "Should format post date");
    assert!(!html.contains("post_url"), "Shortcode should be expanded");

    Ok(())
}

/// Tests index lists posts newest first with site metadata.
#[test]
fn test_build_site_index_page() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path());

    // Act
    build_site(&config)?;

    // Assert
    let html = fs::read_to_string(output.path().join("index.html"))?;
    assert!(html.contains("<title>Jwio | Jeremy Wells</title>"));
    let second = html.find("Second Post").expect("second post listed");
    let first = html.find("Hello World").expect("first post listed");
    assert!(second < first, "Newest post should be listed first");
    assert!(html.contains("href=\"./about/index.html\""), "Nav should link about");

    Ok(())
}

/// Tests code blocks are highlighted and the about page is marked.
#[test]
fn test_build_site_highlight_and_about_class() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path());

    // Act
    build_site(&config)?;

    // Assert
    let post = fs::read_to_string(output.path().join("posts/hello-world/index.html"))?;
    assert!(post.contains("<code class=\"language-cs\">"));
    assert!(post.contains("hljs-"), "Should contain highlight classes");

    let about = fs::read_to_string(output.path().join("about/index.html"))?;
    assert!(about.contains("about-page"));
    assert!(about.contains("open-about-links-in-new-tab.js"));

    Ok(())
}

/// Tests a dangling post_url fails the build before any page is written.
#[test]
fn test_build_site_missing_post_fails() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    write_file(
        site.path(),
        "posts/dangling.md",
        "---\ntitle: Dangling\ndate: 2022-01-01\n---\nSee {% post_url \"missing-slug\" %}.\n",
    )?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path().join("_site"));

    // Act
    let result = build_site(&config);

    // Assert
    let err = result.expect_err("Build should fail on missing post");
    let message = format!("{:#}", err);
    assert!(message.contains("missing-slug"), "Should name slug: {}", message);
    assert!(message.contains("dangling"), "Should name source: {}", message);
    assert!(
        !config.output.join("index.html").exists(),
        "No page should be written"
    );

    Ok(())
}

/// Tests drafts are skipped unless requested.
#[test]
fn test_build_site_drafts() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    write_file(
        site.path(),
        "posts/wip.md",
        "---\ntitle: Work in progress\ndate: 2022-01-01\ndraft: true\n---\nSoon.\n",
    )?;
    let output = TempDir::new()?;
    let mut config = Config::new(site.path(), output.path());

    // Act
    let without = build_site(&config)?;
    config.drafts = true;
    let with = build_site(&config)?;

    // Assert
    assert_eq!(without.posts, 2);
    assert_eq!(with.posts, 3);
    assert!(output.path().join("posts/wip/index.html").exists());

    Ok(())
}

/// Tests duplicate post URLs are rejected while loading the collection.
#[test]
fn test_load_posts_duplicate_url() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    write_file(
        site.path(),
        "posts/copy.md",
        "---\ntitle: Copy\ndate: 2022-01-01\nslug: hello-world\n---\n",
    )?;

    // Act
    let result = load_posts(&site.path().join("posts"), false);

    // Assert
    let message = format!("{:#}", result.expect_err("Duplicate URL should fail"));
    assert!(message.contains("/posts/hello-world/"), "{}", message);

    Ok(())
}

/// Tests the resolver against a collection loaded from disk.
#[test]
fn test_post_url_on_loaded_collection() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let posts = load_posts(&site.path().join("posts"), false)?;
    let before = posts.clone();

    // Act
    let found = post_url(&posts, "hello-world");
    let missing = post_url(&posts, "missing-slug");

    // Assert
    assert_eq!(found?, "/posts/hello-world/");
    assert_eq!(
        missing.expect_err("Should not resolve").to_string(),
        "post not found for slug \"missing-slug\""
    );
    assert_eq!(posts, before, "Collection should be unchanged");

    Ok(())
}

/// Tests a site without metadata or passthrough directory still builds.
#[test]
fn test_build_minimal_site() -> Result<()> {
    // Arrange
    let site = TempDir::new()?;
    write_file(
        site.path(),
        "posts/only.md",
        "---\ntitle: Only\ndate: 2020-02-02\n---\nHi\n",
    )?;
    let output = TempDir::new()?;
    let config = Config::new(site.path(), output.path());

    // Act
    let summary = build_site(&config)?;

    // Assert
    assert_eq!(summary.posts, 1);
    assert_eq!(summary.passthrough_files, 0);
    assert!(output.path().join("posts/only/index.html").exists());

    Ok(())
}

/// Tests an unknown highlight theme fails the build.
#[test]
fn test_build_site_unknown_theme() -> Result<()> {
    // Arrange
    let site = create_test_site()?;
    let output = TempDir::new()?;
    let mut config = Config::new(site.path(), output.path());
    config.theme = "No-Such-Theme".to_string();

    // Act
    let result = build_site(&config);

    // Assert
    assert!(result.is_err());

    Ok(())
}
