/// A résumé flattened to ordered text lines, pages already concatenated in
/// page order. Extraction indexes into the lines; URL search runs over the
/// full text. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    lines: Vec<String>,
    text: String,
}

impl RawDocument {
    /// Builds a document from decoded text. Page breaks must already be
    /// newlines; `lines` follows the text order exactly.
    pub fn from_text(text: String) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        RawDocument { lines, text }
    }

    /// Sentinel for documents whose text could not be decoded. Every
    /// extractor sees no lines and leaves its fields empty.
    pub fn empty() -> Self {
        RawDocument::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bounds-checked line access. Field extractors go through this so a
    /// computed index past the end degrades to `None`, never a fault.
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_lines_in_order() {
        let doc = RawDocument::from_text("Contact\n\nExperience".to_string());
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.line(0), Some("Contact"));
        assert_eq!(doc.line(1), Some(""));
        assert_eq!(doc.line(2), Some("Experience"));
    }

    #[test]
    fn test_line_out_of_bounds_is_none() {
        let doc = RawDocument::from_text("only".to_string());
        assert_eq!(doc.line(1), None);
        assert_eq!(doc.line(100), None);
    }

    #[test]
    fn test_empty_sentinel_has_no_lines() {
        let doc = RawDocument::empty();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.text(), "");
        assert_eq!(doc.line(0), None);
    }

    #[test]
    fn test_text_is_preserved_verbatim() {
        let text = "a\nb\nc";
        let doc = RawDocument::from_text(text.to_string());
        assert_eq!(doc.text(), text);
    }
}
