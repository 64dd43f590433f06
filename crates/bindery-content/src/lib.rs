//! Article loading, frontmatter extraction, and e-book formatting.
//!
//! This crate turns a post or page (an optional YAML frontmatter block
//! followed by Markdown or HTML) into a single text block suitable for
//! piping into Pandoc for EPUB conversion. Callers hand it a file path and
//! the list of metadata fields to surface; everything around that (finding
//! files, invoking Pandoc, command-line handling) lives elsewhere.
//!
//! # Modules
//!
//! - [`article`]: Article loading and formatting
//!   - [`article::frontmatter`]: YAML frontmatter extraction
//!   - [`article::loader`]: Reading and splitting an article
//!   - [`article::format`]: Pandoc-ready output rendering
//!
//! # Example
//!
//! ```rust
//! use bindery_content::article::Article;
//!
//! let text = "---\ntitle: Hello\nauthor: Jane\n---\nSome **body** text.\n";
//! let article = Article::from_text("post.md", text.to_string(), vec!["author".into()]);
//!
//! assert_eq!(
//!     article.format().unwrap(),
//!     "# Hello\n\n<p class='author'>Jane</p>\n\nSome **body** text.\n",
//! );
//! ```

pub mod article;

// Re-export commonly used types
pub use article::{extract_frontmatter, rewrite_highlight_tags, Article, Frontmatter};
