//! Pandoc-ready article rendering.
//!
//! Renders an [`Article`] as the text handed to Pandoc when assembling the
//! EPUB: a level-1 heading for the title, one `<p>` block per surfaced
//! metadata field carrying the field name as its CSS class for styling in
//! the e-book, then the body with Liquid highlight tags rewritten to
//! `<pre>` blocks.

use bindery_core::{Error, Result};
use serde_yaml::Value;

use crate::article::loader::Article;

/// Liquid tag opening a plain-text code listing.
const HIGHLIGHT_OPEN: &str = "{% highlight text %}";
/// Liquid tag closing a code listing.
const HIGHLIGHT_CLOSE: &str = "{% endhighlight %}";

impl Article {
    /// Render the article for EPUB conversion.
    ///
    /// The output is the join of these sections, separated by one blank
    /// line:
    ///
    /// 1. `# {title}` from the metadata.
    /// 2. `<p class='{field}'>{value}</p>` for each required field whose
    ///    metadata value is a non-null scalar; other fields are skipped
    ///    silently with no placeholder.
    /// 3. The body, with [`rewrite_highlight_tags`] applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingMetadata`] when the metadata lacks a usable
    /// `title`. Every article must supply one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bindery_content::article::Article;
    ///
    /// let text = "---\ntitle: Hello\nauthor: Jane\n---\nSome **body** text.\n";
    /// let article = Article::from_text("post.md", text.to_string(), vec!["author".into()]);
    ///
    /// assert_eq!(
    ///     article.format().unwrap(),
    ///     "# Hello\n\n<p class='author'>Jane</p>\n\nSome **body** text.\n",
    /// );
    /// ```
    pub fn format(&self) -> Result<String> {
        let title = self
            .metadata()
            .and_then(|m| m.get("title"))
            .and_then(scalar_text)
            .ok_or_else(|| Error::missing_metadata("title", self.path()))?;

        let mut sections = vec![format!("# {title}")];

        for field in self.required_fields() {
            let value = self
                .metadata()
                .and_then(|m| m.get(field))
                .and_then(scalar_text);
            if let Some(value) = value {
                sections.push(format!("<p class='{field}'>{value}</p>"));
            }
        }

        sections.push(rewrite_highlight_tags(self.body()));

        Ok(sections.join("\n\n"))
    }
}

/// Render a YAML scalar as display text.
///
/// Null, sequences, and mappings yield `None`: only scalars can be
/// projected into a styled paragraph.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Rewrite Liquid code-listing tags to preformatted-block markers.
///
/// Replaces every literal `{% highlight text %}` with `<pre>` and every
/// literal `{% endhighlight %}` with `</pre>`. The substitution is plain
/// string matching over exactly this two-entry mapping; all other content,
/// including other Liquid tags, passes through unchanged.
pub fn rewrite_highlight_tags(body: &str) -> String {
    body.replace(HIGHLIGHT_OPEN, "<pre>")
        .replace(HIGHLIGHT_CLOSE, "</pre>")
}

// ============================================================================
// Tests
// ============================================================================
