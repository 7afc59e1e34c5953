//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out temporary blog sources used across
//! multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Site metadata used by the sample site.
pub const METADATA: &str = r#"title: "Jwio | Jeremy Wells"
url: https://jeremywells.io
language: en
description: Full-stack software developer sharing learnings
author:
  name: Jeremy Wells
  email: hi@jeremywells.io
  url: https://jeremywells.io/about
"#;

/// Writes file to site, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(site_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = site_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Creates temporary site with metadata, two linked posts, an about page
/// and a static file.
///
/// # Returns
///
/// Temporary directory containing the site sources
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_test_site() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    write_file(path, "_data/metadata.yaml", METADATA)?;

    write_file(
        path,
        "posts/hello-world.md",
        "---\ntitle: Hello World\ndate: 2021-03-04\ntags: [dotnet]\ndescription: The first post\n---\n\
         # Welcome\n\n```cs\nConsole.WriteLine(\"hi\");\n```\n",
    )?;

    write_file(
        path,
        "posts/second-post.md",
        "---\ntitle: Second Post\ndate: 2021-04-01\ntags: [dotnet, angular]\n---\n\
         Read [the first post]({% post_url \"hello-world\" %}) before this one.\n",
    )?;

    write_file(
        path,
        "pages/about.md",
        "---\ntitle: About\n---\nSay hi on [GitHub](https://github.com).\n",
    )?;

    write_file(path, "static/img/logo.svg", "<svg></svg>")?;

    Ok(dir)
}
