//! Length-checked text used for labels and editor input fields

use std::fmt;

/// Maximum characters in an entity label or texture name
pub const OBJECT_NAME_CHARACTER_LIMIT: usize = 64;

/// Maximum characters in the import path field
pub const IMPORT_PATH_CHARACTER_LIMIT: usize = 1024;

/// Result of writing into a [`BoundedString`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    None,
    /// The input was cut at the limit; `dropped` characters were discarded.
    Truncated { dropped: usize },
}

/// A string that never holds more than `limit` characters.
///
/// Writes that exceed the limit are cut on a character boundary and report
/// how much was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedString {
    text: String,
    limit: usize,
}

impl BoundedString {
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit,
        }
    }

    /// Replace the contents with `text`, truncated to the limit.
    pub fn set(&mut self, text: &str) -> Truncation {
        let total = text.chars().count();
        let cut = text
            .char_indices()
            .nth(self.limit)
            .map(|(index, _)| index)
            .unwrap_or(text.len());

        self.text.clear();
        self.text.push_str(&text[..cut]);

        if total > self.limit {
            Truncation::Truncated {
                dropped: total - self.limit,
            }
        } else {
            Truncation::None
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for BoundedString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_stored_verbatim() {
        let mut text = BoundedString::new(8);
        assert_eq!(text.set("Cube"), Truncation::None);
        assert_eq!(text.as_str(), "Cube");
    }

    #[test]
    fn text_at_exact_limit_is_not_truncated() {
        let mut text = BoundedString::new(4);
        assert_eq!(text.set("abcd"), Truncation::None);
        assert_eq!(text.char_count(), 4);
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let mut text = BoundedString::new(3);
        let result = text.set("héllo wörld");
        assert_eq!(result, Truncation::Truncated { dropped: 8 });
        assert_eq!(text.as_str(), "hél");
        assert_eq!(text.limit(), 3);
    }

    #[test]
    fn truncation_replaces_previous_contents() {
        let mut text = BoundedString::new(5);
        text.set("12345");
        text.set("ab");
        assert_eq!(text.as_str(), "ab");
    }
}
