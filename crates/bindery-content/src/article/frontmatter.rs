//! YAML frontmatter extraction from article files.
//!
//! Frontmatter is metadata at the start of a post or page, delimited by
//! lines consisting of `---`:
//!
//! ```markdown
//! ---
//! title: My Article
//! author: Jane
//! tags:
//!   - essays
//! ---
//!
//! # Article Content
//!
//! The body of the article starts here.
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bindery_content::article::extract_frontmatter;
//!
//! let text = "---\ntitle: Test\n---\nBody";
//! let split = extract_frontmatter(text);
//!
//! assert!(split.has_header());
//! assert_eq!(split.body(), "Body");
//!
//! // Access raw YAML value
//! let title = split.value()
//!     .and_then(|v| v.get("title"))
//!     .and_then(|v| v.as_str());
//! assert_eq!(title, Some("Test"));
//! ```

use bindery_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Result of splitting an article into frontmatter and body.
///
/// Holds the parsed YAML value (if present) and the body content after the
/// closing delimiter.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed YAML header, if present and valid.
    value: Option<Value>,
    /// Body content after the closing delimiter.
    body: &'a str,
    /// Whether both delimiter lines were found (even if parsing failed).
    had_delimiters: bool,
    /// Parser message when delimiters were found but the payload was invalid.
    parse_error: Option<String>,
}

impl<'a> Frontmatter<'a> {
    /// A split with a successfully parsed header.
    fn parsed(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
            parse_error: None,
        }
    }

    /// A split where no header block was found.
    fn absent(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
            parse_error: None,
        }
    }

    /// A split where delimiters were found but the payload did not parse.
    fn malformed(body: &'a str, message: String) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
            parse_error: Some(message),
        }
    }

    /// Check if a header block was found and parsed.
    pub fn has_header(&self) -> bool {
        self.value.is_some()
    }

    /// Check if both delimiter lines were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// The YAML parser's message, when the header payload was invalid.
    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Take ownership of the YAML value, if present.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// Get the body content (everything after the closing delimiter line).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the header into a specific type.
    ///
    /// Returns `None` if no header was found.
    /// Returns `Err` if deserialization fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bindery_content::article::extract_frontmatter;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct MyMeta {
    ///     title: String,
    /// }
    ///
    /// let text = "---\ntitle: Hello\n---\nBody";
    /// let split = extract_frontmatter(text);
    /// let meta: Option<MyMeta> = split.deserialize().unwrap();
    /// assert_eq!(meta.unwrap().title, "Hello");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::parse(format!("failed to deserialize frontmatter: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Get a string field from the header.
    ///
    /// Convenience method for accessing common string fields.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Check whether a line is a frontmatter delimiter: exactly `---` followed
/// only by optional trailing whitespace. `----` and `--- x` do not qualify.
fn is_delimiter_line(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Locate the header span and slice the remainder.
///
/// Returns `(header, body)` where `header` is the raw text strictly between
/// the two delimiter lines and `body` is everything strictly after the
/// closing delimiter line and its terminating newline. Returns `None` when
/// the text does not begin with a delimiter line or no closing delimiter
/// line follows.
fn locate_header(text: &str) -> Option<(&str, &str)> {
    let first_line_end = text.find('\n')?;
    if !is_delimiter_line(&text[..first_line_end]) {
        return None;
    }

    let header_start = first_line_end + 1;
    let mut cursor = header_start;
    while cursor <= text.len() {
        let line_end = text[cursor..]
            .find('\n')
            .map_or(text.len(), |pos| cursor + pos);
        if is_delimiter_line(&text[cursor..line_end]) {
            let header = &text[header_start..cursor];
            let body = if line_end < text.len() {
                &text[line_end + 1..]
            } else {
                ""
            };
            return Some((header, body));
        }
        if line_end == text.len() {
            break;
        }
        cursor = line_end + 1;
    }

    None
}

/// Split article text into YAML frontmatter and body.
///
/// The header block must start on the first line. Both delimiters are lines
/// consisting of `---` with optional trailing whitespace; the header content
/// between them may be empty or span many lines.
///
/// # Behavior
///
/// - No delimiters found: the whole input is the body, `has_header()` is
///   false.
/// - Delimiters found, payload parses: `has_header()` is true and
///   [`Frontmatter::value`] holds the YAML.
/// - Delimiters found, payload invalid: `has_header()` is false,
///   [`Frontmatter::parse_error`] carries the parser message, and the body
///   is still the post-delimiter remainder.
///
/// # Example
///
/// ```rust
/// use bindery_content::article::extract_frontmatter;
///
/// // With frontmatter
/// let text = "---\ntitle: Test\n---\n# Heading";
/// let split = extract_frontmatter(text);
/// assert!(split.has_header());
/// assert_eq!(split.get_str("title"), Some("Test"));
/// assert_eq!(split.body(), "# Heading");
///
/// // Without frontmatter
/// let text = "# Just Markdown";
/// let split = extract_frontmatter(text);
/// assert!(!split.has_header());
/// assert_eq!(split.body(), "# Just Markdown");
/// ```
pub fn extract_frontmatter(text: &str) -> Frontmatter<'_> {
    let Some((header, body)) = locate_header(text) else {
        return Frontmatter::absent(text);
    };

    match serde_yaml::from_str::<Value>(header) {
        Ok(value) => Frontmatter::parsed(value, body),
        Err(e) => Frontmatter::malformed(body, e.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    // ------------------------------------------------------------------------
    // Basic extraction tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_valid_frontmatter() {
        let text = "---\ntitle: Test Article\nauthor: Jane\n---\n\n# Content";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert!(split.had_delimiters());
        assert_eq!(split.get_str("title"), Some("Test Article"));
        assert_eq!(split.get_str("author"), Some("Jane"));
        assert_eq!(split.body(), "\n# Content");
    }

    #[test]
    fn test_extract_no_frontmatter() {
        let text = "# Just Markdown\n\nNo frontmatter here.";
        let split = extract_frontmatter(text);

        assert!(!split.has_header());
        assert!(!split.had_delimiters());
        assert!(split.parse_error().is_none());
        assert_eq!(split.body(), text);
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let text = "---\n---\nBody content";
        let split = extract_frontmatter(text);

        // Empty YAML parses as Null
        assert!(split.had_delimiters());
        assert_eq!(split.body(), "Body content");
    }

    #[test]
    fn test_extract_frontmatter_no_closing() {
        let text = "---\ntitle: Incomplete\n\nNo closing delimiter";
        let split = extract_frontmatter(text);

        assert!(!split.has_header());
        assert!(!split.had_delimiters());
        assert_eq!(split.body(), text);
    }

    #[test]
    fn test_extract_frontmatter_invalid_yaml() {
        let text = "---\ntitle: \"unclosed\n---\nBody";
        let split = extract_frontmatter(text);

        assert!(!split.has_header());
        assert!(split.had_delimiters());
        assert!(split.parse_error().is_some());
        // The structural match succeeded, so the body is still the remainder
        assert_eq!(split.body(), "Body");
    }

    // ------------------------------------------------------------------------
    // Delimiter recognition tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_delimiter_trailing_whitespace_tolerated() {
        let text = "---  \ntitle: Test\n---\t\nBody";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert_eq!(split.get_str("title"), Some("Test"));
        assert_eq!(split.body(), "Body");
    }

    #[test]
    fn test_four_hyphens_not_a_delimiter() {
        let text = "----\ntitle: Test\n----\nBody";
        let split = extract_frontmatter(text);

        assert!(!split.had_delimiters());
        assert_eq!(split.body(), text);
    }

    #[test]
    fn test_delimiter_with_content_not_recognized() {
        let text = "--- yaml\ntitle: Test\n---\nBody";
        let split = extract_frontmatter(text);

        assert!(!split.had_delimiters());
        assert_eq!(split.body(), text);
    }

    #[test]
    fn test_header_must_start_on_first_line() {
        let text = "preamble\n---\ntitle: Test\n---\nBody";
        let split = extract_frontmatter(text);

        assert!(!split.had_delimiters());
        assert_eq!(split.body(), text);
    }

    // ------------------------------------------------------------------------
    // Body convention tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_body_excludes_closing_delimiter_and_its_newline() {
        let text = "---\nkey: value\n---\nB";
        let split = extract_frontmatter(text);

        assert_eq!(split.get_str("key"), Some("value"));
        assert_eq!(split.body(), "B");
    }

    #[test]
    fn test_body_preserves_leading_blank_line() {
        let text = "---\ntitle: Test\n---\n\nBody";
        let split = extract_frontmatter(text);

        assert_eq!(split.body(), "\nBody");
    }

    #[test]
    fn test_closing_delimiter_at_end_of_input() {
        let text = "---\ntitle: Test\n---";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert_eq!(split.body(), "");
    }

    // ------------------------------------------------------------------------
    // Complex frontmatter tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_frontmatter_with_lists() {
        let text = "---\ntitle: Test\ntags:\n  - essays\n  - drafts\n---\nBody";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        let tags: Vec<&str> = split
            .value()
            .and_then(|v| v.get("tags"))
            .and_then(|v| v.as_sequence())
            .map(|seq| seq.iter().filter_map(|item| item.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(tags, vec!["essays", "drafts"]);
    }

    #[test]
    fn test_extract_frontmatter_with_nested() {
        let text = "---\nmeta:\n  author: Jane\n  version: 1.0\n---\nBody";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        let author = split
            .value()
            .and_then(|v| v.get("meta"))
            .and_then(|m| m.get("author"))
            .and_then(|a| a.as_str());
        assert_eq!(author, Some("Jane"));
    }

    // ------------------------------------------------------------------------
    // Deserialization tests
    // ------------------------------------------------------------------------

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestMeta {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
        author: Option<String>,
    }

    #[test]
    fn test_deserialize_frontmatter() {
        let text = "---\ntitle: My Article\ntags:\n  - a\n  - b\nauthor: Jane\n---\nBody";
        let split = extract_frontmatter(text);
        let meta: Option<TestMeta> = split.deserialize().unwrap();

        let meta = meta.unwrap();
        assert_eq!(meta.title, "My Article");
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.author, Some("Jane".to_string()));
    }

    #[test]
    fn test_deserialize_no_frontmatter() {
        let text = "# No frontmatter";
        let split = extract_frontmatter(text);
        let meta: Option<TestMeta> = split.deserialize().unwrap();

        assert!(meta.is_none());
    }

    #[test]
    fn test_deserialize_shape_mismatch_is_error() {
        let text = "---\ntitle:\n  nested: true\n---\nBody";
        let split = extract_frontmatter(text);
        let meta: bindery_core::Result<Option<TestMeta>> = split.deserialize();

        assert!(meta.is_err());
    }

    // ------------------------------------------------------------------------
    // Edge cases
    // ------------------------------------------------------------------------

    #[test]
    fn test_frontmatter_with_dashes_in_body() {
        let text = "---\ntitle: Test\n---\nContent with --- dashes in it";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert!(split.body().contains("--- dashes"));
    }

    #[test]
    fn test_frontmatter_unicode() {
        let text = "---\ntitle: 音楽理論\nauthor: クロード\n---\n本文";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert_eq!(split.get_str("title"), Some("音楽理論"));
        assert_eq!(split.get_str("author"), Some("クロード"));
        assert_eq!(split.body(), "本文");
    }

    #[test]
    fn test_empty_input() {
        let split = extract_frontmatter("");

        assert!(!split.has_header());
        assert_eq!(split.body(), "");
    }

    #[test]
    fn test_only_opening_delimiter() {
        let split = extract_frontmatter("---");

        assert!(!split.has_header());
        assert_eq!(split.body(), "---");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "---\r\ntitle: Test\r\n---\r\nBody";
        let split = extract_frontmatter(text);

        assert!(split.has_header());
        assert_eq!(split.get_str("title"), Some("Test"));
        assert_eq!(split.body(), "Body");
    }
}
