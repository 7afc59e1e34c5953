//! Bundled assets and passthrough copy

use anyhow::{Context, Result};
use std::{fs, path::Path};
use walkdir::WalkDir;

use crate::highlight::theme_css;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const POST_LIST: &str = include_str!("../assets/components/post-list.css");
const POST: &str = include_str!("../assets/post.css");
const CODE: &str = include_str!("../assets/code.css");

/// Client scripts written to `assets/scripts/`, in load order.
pub const SCRIPTS: &[(&str, &str)] = &[
    (
        "copy-code-block.js",
        include_str!("../assets/scripts/copy-code-block.js"),
    ),
    (
        "open-in-new-tab-except-no-target.js",
        include_str!("../assets/scripts/open-in-new-tab-except-no-target.js"),
    ),
    (
        "open-about-links-in-new-tab.js",
        include_str!("../assets/scripts/open-about-links-in-new-tab.js"),
    ),
];

/// Writes the site stylesheet and the highlight theme stylesheet
pub fn write_css_assets(assets_dir: &Path, theme: &str) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
    write_bundled(
        assets_dir,
        "site.css",
        &[BASE, LAYOUT, POST_LIST, POST, CODE],
    )?;

    let highlight = theme_css(theme)?;
    fs::write(assets_dir.join("highlight.css"), highlight)
        .context("Failed to write CSS asset: highlight.css")?;
    Ok(())
}

/// Writes the client scripts
pub fn write_script_assets(assets_dir: &Path) -> Result<()> {
    let scripts_dir = assets_dir.join("scripts");
    fs::create_dir_all(&scripts_dir).context("Failed to create scripts directory")?;

    for (name, source) in SCRIPTS {
        fs::write(scripts_dir.join(name), source)
            .with_context(|| format!("Failed to write script asset: {}", name))?;
    }
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// Copies a directory tree verbatim into the output directory.
///
/// `source` is copied to `output/<name>` where `name` is the relative
/// passthrough path, so `static/img/a.png` lands at `_site/static/img/a.png`.
///
/// # Returns
///
/// Number of files copied, or `None` if `source` does not exist
///
/// # Errors
///
/// Returns error if walking or copying fails
pub fn copy_passthrough(source: &Path, target: &Path) -> Result<Option<usize>> {
    if !source.is_dir() {
        return Ok(None);
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("Walked outside passthrough directory")?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).with_context(|| {
                format!("Failed to create directory {}", destination.display())
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &destination).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
            copied += 1;
        }
    }

    Ok(Some(copied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");

        // Act
        write_css_assets(dir.path(), "InspiredGitHub").expect("Should write CSS");

        // Assert
        let site = fs::read_to_string(dir.path().join("site.css")).expect("site.css");
        assert!(site.contains(".code-copy-container"));
        assert!(site.contains(".post-list"));
        assert!(dir.path().join("highlight.css").exists());
    }

    #[test]
    fn test_write_css_assets_unknown_theme() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");

        // Act
        let result = write_css_assets(dir.path(), "nope");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_write_script_assets() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");

        // Act
        write_script_assets(dir.path()).expect("Should write scripts");

        // Assert
        let copy = fs::read_to_string(dir.path().join("scripts/copy-code-block.js"))
            .expect("copy script");
        assert!(copy.contains("navigator.clipboard.writeText"));
        assert!(copy.contains("eleventy-gist-raw-content"));
        assert!(
            dir.path()
                .join("scripts/open-in-new-tab-except-no-target.js")
                .exists()
        );
        assert!(
            dir.path()
                .join("scripts/open-about-links-in-new-tab.js")
                .exists()
        );
    }

    #[test]
    fn test_copy_passthrough_nested() {
        // Arrange
        let src = TempDir::new().expect("temp dir");
        let out = TempDir::new().expect("temp dir");
        fs::create_dir_all(src.path().join("img/icons")).expect("mkdir");
        fs::write(src.path().join("favicon.ico"), [0u8, 1, 2]).expect("write");
        fs::write(src.path().join("img/icons/a.svg"), "<svg/>").expect("write");
        let target = out.path().join("static");

        // Act
        let copied = copy_passthrough(src.path(), &target).expect("Should copy");

        // Assert
        assert_eq!(copied, Some(2));
        assert_eq!(
            fs::read(target.join("favicon.ico")).expect("favicon"),
            vec![0u8, 1, 2]
        );
        assert_eq!(
            fs::read_to_string(target.join("img/icons/a.svg")).expect("svg"),
            "<svg/>"
        );
    }

    #[test]
    fn test_copy_passthrough_missing_source() {
        // Arrange
        let out = TempDir::new().expect("temp dir");

        // Act
        let copied = copy_passthrough(Path::new("/no/such/dir"), out.path()).expect("Should skip");

        // Assert
        assert_eq!(copied, None);
    }
}
