use serde::Deserialize;

/// The three résumé sections the pipeline anchors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Contact,
    Experience,
    Education,
}

// Default header strings per section across the languages the exports come
// in: English, Japanese, Chinese, Korean, French.
const CONTACT_HEADERS: &[&str] = &["Contact", "連絡先", "联系方式", "연락처", "Coordonnées"];
const EXPERIENCE_HEADERS: &[&str] = &["Experience", "職歴", "工作经历", "경력", "Expérience"];
const EDUCATION_HEADERS: &[&str] = &["Education", "学歴", "教育经历", "학력", "Formation"];

/// Exact-match header strings for each section kind. Built from the
/// defaults above or deserialized from a `[headers]` config table, then
/// injected into the extractor. Never global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderTable {
    pub contact: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

impl Default for HeaderTable {
    fn default() -> Self {
        HeaderTable {
            contact: to_owned(CONTACT_HEADERS),
            experience: to_owned(EXPERIENCE_HEADERS),
            education: to_owned(EDUCATION_HEADERS),
        }
    }
}

fn to_owned(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

impl HeaderTable {
    pub fn for_kind(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Contact => &self.contact,
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
        }
    }

    /// True when the trimmed line is exactly a registered header of `kind`.
    /// Exact equality, not containment: prose that merely mentions a header
    /// word must not anchor a section.
    pub fn matches(&self, kind: SectionKind, line: &str) -> bool {
        let trimmed = line.trim();
        self.for_kind(kind).iter().any(|h| h == trimmed)
    }

    /// True when the trimmed line is exactly a registered header of any
    /// kind. Extracted field values must never be one of these.
    pub fn is_header_line(&self, line: &str) -> bool {
        [
            SectionKind::Contact,
            SectionKind::Experience,
            SectionKind::Education,
        ]
        .into_iter()
        .any(|kind| self.matches(kind, line))
    }

    /// True when the line contains any education header as a substring.
    /// Year scanning bounds its block by containment, since the next
    /// education entry may share its line with other text.
    pub fn contains_education_header(&self, line: &str) -> bool {
        self.education.iter().any(|h| line.contains(h.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_five_languages() {
        let table = HeaderTable::default();
        assert_eq!(table.contact.len(), 5);
        assert_eq!(table.experience.len(), 5);
        assert_eq!(table.education.len(), 5);
        assert!(table.contact.iter().any(|h| h == "連絡先"));
        assert!(table.experience.iter().any(|h| h == "경력"));
        assert!(table.education.iter().any(|h| h == "Formation"));
    }

    #[test]
    fn test_matches_trims_surrounding_whitespace() {
        let table = HeaderTable::default();
        assert!(table.matches(SectionKind::Experience, "  Experience  "));
        assert!(table.matches(SectionKind::Education, "学歴"));
    }

    #[test]
    fn test_matches_is_exact_not_substring() {
        let table = HeaderTable::default();
        assert!(!table.matches(SectionKind::Experience, "Experience at Acme"));
        assert!(!table.matches(SectionKind::Contact, "Contact me anytime"));
    }

    #[test]
    fn test_is_header_line_spans_all_kinds() {
        let table = HeaderTable::default();
        assert!(table.is_header_line("Contact"));
        assert!(table.is_header_line("職歴"));
        assert!(table.is_header_line("Education"));
        assert!(!table.is_header_line("Keio University"));
    }

    #[test]
    fn test_education_boundary_uses_containment() {
        let table = HeaderTable::default();
        assert!(table.contains_education_header("Education continued"));
        assert!(table.contains_education_header("学歴について"));
        assert!(!table.contains_education_header("Experience"));
    }

    #[test]
    fn test_deserialize_partial_table_keeps_defaults() {
        let table: HeaderTable = toml::from_str(r#"education = ["Studies"]"#).unwrap();
        assert_eq!(table.education, vec!["Studies".to_string()]);
        assert_eq!(table.contact, HeaderTable::default().contact);
        assert_eq!(table.experience, HeaderTable::default().experience);
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<HeaderTable, _> = toml::from_str(r#"exprience = ["typo"]"#);
        assert!(result.is_err());
    }
}
