//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Component, Path, PathBuf};

/// Directory holding post markdown files, relative to the input root.
pub const POSTS_DIR: &str = "posts";

/// Directory holding standalone page markdown files.
pub const PAGES_DIR: &str = "pages";

/// Site metadata file, relative to the input root.
pub const METADATA_FILE: &str = "_data/metadata.yaml";

/// Command line configuration for jwio.
#[derive(Debug, Clone, Parser)]
#[command(name = "jwio", version, about, long_about = None)]
pub struct Config {
    /// Site source directory
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "_site")]
    pub output: PathBuf,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long, default_value = "InspiredGitHub")]
    pub theme: String,

    /// Directories copied verbatim into the output root
    #[arg(long = "passthrough", default_values = ["static"])]
    pub passthrough: Vec<PathBuf>,

    /// Include posts marked as drafts
    #[arg(long)]
    pub drafts: bool,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Creates configuration with defaults for the given input and output.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            theme: "InspiredGitHub".to_string(),
            passthrough: vec![PathBuf::from("static")],
            drafts: false,
            no_open: true,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input directory does not exist, the output
    /// directory is the input directory itself, or a passthrough directory
    /// does not name a subdirectory of the input root (absolute, `..`, `.`,
    /// empty) or names the output directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_dir() {
            bail!("Input directory does not exist: {}", self.input.display());
        }

        if self.output == self.input {
            bail!(
                "Output directory must differ from input: {}",
                self.output.display()
            );
        }

        for dir in &self.passthrough {
            let relative = dir
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
            let names_subdirectory = dir.components().any(|c| matches!(c, Component::Normal(_)));
            if !relative || !names_subdirectory {
                bail!(
                    "Passthrough directory must be a subdirectory of input: {:?}",
                    dir
                );
            }
            if self.passthrough_source(dir) == self.output {
                bail!(
                    "Passthrough directory must not be the output directory: {}",
                    dir.display()
                );
            }
        }

        Ok(())
    }

    /// Returns the posts directory inside the input root.
    pub fn posts_dir(&self) -> PathBuf {
        self.input.join(POSTS_DIR)
    }

    /// Returns the standalone pages directory inside the input root.
    pub fn pages_dir(&self) -> PathBuf {
        self.input.join(PAGES_DIR)
    }

    /// Returns the site metadata file path.
    pub fn metadata_path(&self) -> PathBuf {
        self.input.join(METADATA_FILE)
    }

    /// Returns the output assets directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.output.join("assets")
    }

    /// Resolves a passthrough directory against the input root.
    pub fn passthrough_source(&self, dir: &Path) -> PathBuf {
        self.input.join(dir)
    }
}
