//! Document module - the cleaned YAML produced by a generation run

use std::fmt;

/// Non-empty YAML text extracted from a completion.
///
/// The content is never validated against the schema; the only invariant is
/// that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlDocument(String);

/// Returned when building a [`YamlDocument`] from empty text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDocument;

impl fmt::Display for EmptyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no YAML content received")
    }
}

impl std::error::Error for EmptyDocument {}

impl YamlDocument {
    /// Wrap extracted text, rejecting the empty string
    ///
    /// # Examples
    ///
    /// ```
    /// use configgen_domain::YamlDocument;
    ///
    /// assert!(YamlDocument::new("hostname: r1").is_ok());
    /// assert!(YamlDocument::new("").is_err());
    /// ```
    pub fn new(content: impl Into<String>) -> Result<Self, EmptyDocument> {
        let content = content.into();
        if content.is_empty() {
            return Err(EmptyDocument);
        }
        Ok(Self(content))
    }

    /// Borrow the YAML text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of lines in the document
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }

    /// Consume the document, returning the text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for YamlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for YamlDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
