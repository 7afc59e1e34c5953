//! Site metadata shared by every generated page.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Site wide metadata loaded from `_data/metadata.yaml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Author,
}

/// Site author details.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl SiteMetadata {
    /// Parses metadata from YAML source.
    ///
    /// # Errors
    ///
    /// Returns error if the YAML is malformed or `title` is missing.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Failed to parse site metadata")
    }

    /// Loads metadata from file.
    ///
    /// A missing file yields placeholder metadata named after the input
    /// directory so a bare posts folder still builds.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path, fallback_title: &str) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::placeholder(fallback_title));
        }

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read metadata: {}", path.display()))?;

        Self::from_yaml(&source).with_context(|| format!("Invalid metadata: {}", path.display()))
    }

    /// Creates metadata with only a title set.
    pub fn placeholder(title: &str) -> Self {
        Self {
            title: title.to_string(),
            url: String::new(),
            language: default_language(),
            description: String::new(),
            author: Author::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_metadata() {
        // Arrange
        let yaml = r#"
title: "Jwio | Jeremy Wells"
url: https://jeremywells.io
language: en
description: Full-stack software developer sharing learnings
author:
  name: Jeremy Wells
  email: hi@jeremywells.io
  url: https://jeremywells.io/about
"#;

        // Act
        let meta = SiteMetadata::from_yaml(yaml).expect("Should parse metadata");

        // Assert
        assert_eq!(meta.title, "Jwio | Jeremy Wells");
        assert_eq!(meta.url, "https://jeremywells.io");
        assert_eq!(meta.author.name, "Jeremy Wells");
        assert_eq!(meta.author.email, "hi@jeremywells.io");
    }

    #[test]
    fn test_parse_defaults_language() {
        // Arrange
        let yaml = "title: Blog\n";

        // Act
        let meta = SiteMetadata::from_yaml(yaml).expect("Should parse metadata");

        // Assert
        assert_eq!(meta.language, "en");
        assert!(meta.author.name.is_empty());
    }

    #[test]
    fn test_parse_missing_title_fails() {
        // Arrange
        let yaml = "url: https://example.com\n";

        // Act
        let result = SiteMetadata::from_yaml(yaml);

        // Assert
        assert!(result.is_err(), "Title is required");
    }

    #[test]
    fn test_load_missing_file_uses_placeholder() {
        // Arrange
        let path = Path::new("/no/such/metadata.yaml");

        // Act
        let meta = SiteMetadata::load(path, "my-blog").expect("Should fall back");

        // Assert
        assert_eq!(meta, SiteMetadata::placeholder("my-blog"));
    }
}
