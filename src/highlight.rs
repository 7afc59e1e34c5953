//! Syntax highlighting for fenced code blocks and its theme stylesheet.
//!
//! Code blocks are highlighted with CSS classes rather than inline styles,
//! so the colors come from a stylesheet generated once per build from a
//! syntect theme.

use anyhow::{Context, Result, bail};
use comrak::adapters::SyntaxHighlighterAdapter;
use std::collections::HashMap;
use std::io::{self, Write};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Class style shared by code blocks and the theme stylesheet.
pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// comrak code fence highlighter emitting `hljs-` classed spans.
///
/// Fences are looked up by token (`cs`, `js`, `rust`) then by file
/// extension. Fences without a known language are written as escaped plain
/// text inside the usual `<pre><code>` pair.
pub struct ClassHighlighter {
    syntax_set: SyntaxSet,
}

impl ClassHighlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    /// Highlights `code`, or returns `None` when the language is unknown.
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let Some(syntax) = self.find_syntax(language) else {
            return Ok(None);
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .with_context(|| format!("Failed to highlight {} line", language))?;
        }

        Ok(Some(generator.finalize()))
    }
}

impl Default for ClassHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighterAdapter for ClassHighlighter {
    fn write_highlighted(
        &self,
        output: &mut dyn Write,
        lang: Option<&str>,
        code: &str,
    ) -> io::Result<()> {
        let highlighted = match lang.filter(|l| !l.is_empty()) {
            Some(language) => self
                .highlight(code, language)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{:#}", e)))?,
            None => None,
        };

        match highlighted {
            Some(html) => output.write_all(html.as_bytes()),
            None => comrak::html::escape(output, code.as_bytes()),
        }
    }

    fn write_pre_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        comrak::html::write_opening_tag(output, "pre", attributes)
    }

    fn write_code_tag(
        &self,
        output: &mut dyn Write,
        attributes: HashMap<String, String>,
    ) -> io::Result<()> {
        comrak::html::write_opening_tag(output, "code", attributes)
    }
}

/// Returns the names of the bundled themes.
pub fn available_themes() -> Vec<String> {
    ThemeSet::load_defaults().themes.into_keys().collect()
}

/// Generates the highlight stylesheet for a bundled theme.
///
/// # Arguments
///
/// * `theme`: Theme name (InspiredGitHub, base16-ocean.dark, etc)
///
/// # Errors
///
/// Returns error if the theme is unknown or CSS generation fails
///
/// # Examples
///
/// ```no_run
/// let css = jwio::theme_css("InspiredGitHub")?;
/// assert!(css.contains(".hljs-"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn theme_css(theme: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();

    let Some(selected) = themes.themes.get(theme) else {
        let names: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        bail!(
            "Unknown syntax theme: {} (available: {})",
            theme,
            names.join(", ")
        );
    };

    css_for_theme_with_class_style(selected, CLASS_STYLE)
        .with_context(|| format!("Failed to generate CSS for theme: {}", theme))
}
