//! Normalized input text
//!
//! Every parser and extractor sees the same normalized form: lowercased
//! (Arabic has no case, so this only touches Latin markers), whitespace runs
//! collapsed to one space, and trimmed.

/// A message ready for interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        let text = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if any of `phrases` occurs as a substring
    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.text.contains(phrase))
    }
}

impl From<&str> for Utterance {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Utterance {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        let utterance = Utterance::new("  غير   سعر\tالشقة \n");
        assert_eq!(utterance.as_str(), "غير سعر الشقة");
        assert!(utterance.contains_any(&["غير سعر"]));
    }

    #[test]
    fn test_lowercases_latin_markers() {
        let utterance = Utterance::new("Add Unit in HAMAD");
        assert_eq!(utterance.as_str(), "add unit in hamad");
        assert!(utterance.contains_any(&["add unit"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(Utterance::new(" \t ").is_empty());
        assert!(!Utterance::new("").contains_any(&["price"]));
    }
}
