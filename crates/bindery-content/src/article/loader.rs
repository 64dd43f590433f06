//! Article loading.
//!
//! An [`Article`] is one post or page read from disk: an optional YAML
//! frontmatter block followed by Markdown or HTML content. Loading reads
//! and splits the file once; the article is immutable afterward.
//!
//! # Example
//!
//! ```rust
//! use bindery_content::article::Article;
//!
//! let text = "---\ntitle: Hello\nauthor: Jane\n---\nSome **body** text.";
//! let article = Article::from_text("post.md", text.to_string(), vec!["author".into()]);
//!
//! assert_eq!(article.title(), Some("Hello"));
//! assert_eq!(article.body(), "Some **body** text.");
//! assert_eq!(article.required_fields(), ["author"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use bindery_core::{Error, Result};
use serde_yaml::Value;

use crate::article::frontmatter::extract_frontmatter;

/// One article split into metadata and body.
///
/// Construction parses the input once; formatting reads but never mutates.
/// `required_fields` names the metadata entries to surface in formatted
/// output, in order. `"title"` never appears in it: the title is rendered
/// as the heading regardless, so the constructor removes it.
#[derive(Debug, Clone)]
pub struct Article {
    path: PathBuf,
    metadata: Option<Value>,
    body: String,
    required_fields: Vec<String>,
}

impl Article {
    /// Load an article from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read. A malformed
    /// frontmatter block is not an error: a diagnostic naming the file and
    /// the parser message is logged, and the article carries no metadata.
    pub fn load(path: impl Into<PathBuf>, required_fields: Vec<String>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self::from_text(path, text, required_fields))
    }

    /// Build an article from already-read text.
    ///
    /// Split out from [`Article::load`] so header handling can be exercised
    /// without touching the filesystem.
    pub fn from_text(
        path: impl Into<PathBuf>,
        text: String,
        mut required_fields: Vec<String>,
    ) -> Self {
        let path = path.into();
        required_fields.retain(|f| f != "title");

        let split = extract_frontmatter(&text);
        if let Some(err) = split.parse_error() {
            log::warn!("invalid frontmatter in {}: {err}", path.display());
        }
        let body = split.body().to_string();
        let metadata = split.into_value();

        Self {
            path,
            metadata,
            body,
            required_fields,
        }
    }

    /// Path the article was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed frontmatter, if the header was present and valid.
    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Body content following the frontmatter block, or the whole input
    /// when no header was found.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Metadata fields surfaced by formatting, in order.
    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// The article title, when the metadata carries a string `title`.
    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref()?.get("title")?.as_str()
    }
}

// ============================================================================
// Tests
// ============================================================================
