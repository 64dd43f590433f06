//! Article loading and formatting.
//!
//! This module covers the whole path from a file on disk to Pandoc-ready
//! text:
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`loader`]: Reading and splitting an article
//! - [`format`]: Rendering the formatted output
//!
//! # Design Philosophy
//!
//! The frontmatter utilities return generic types (`serde_yaml::Value`,
//! `&str`) rather than a fixed schema. An article's header is arbitrary
//! YAML; callers that want typed metadata deserialize it into their own
//! structs via [`Frontmatter::deserialize`].
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

pub mod format;
pub mod frontmatter;
pub mod loader;

mod proptests;

// Re-export key types and functions
pub use format::rewrite_highlight_tags;
pub use frontmatter::{extract_frontmatter, Frontmatter};
pub use loader::Article;
