//! Field extraction pipeline: anchor the three résumé sections, run the
//! field extractors against them, and assemble one record per document.
//! Every missing anchor, unmatched pattern, or out-of-range index leaves
//! its fields empty; nothing in here can fail a document.

pub mod contact;
pub mod education;
pub mod experience;
pub mod headers;
pub mod section;
pub mod year;

use tracing::debug;

use crate::extract::headers::{HeaderTable, SectionKind};
use crate::models::document::RawDocument;
use crate::models::record::CandidateRecord;

/// Unicode-aware digit presence. Japanese and Chinese exports sometimes
/// print dates with full-width digits (`２０１６年`), which count as digits
/// for tenure/title disambiguation and the institution scan.
pub(crate) fn has_digit(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}

/// The extraction pipeline. Holds the injected header table and employer
/// name; extraction is pure per document, so one instance serves a whole
/// batch from any number of threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    headers: HeaderTable,
    employer: String,
}

impl Extractor {
    pub fn new(headers: HeaderTable, employer: String) -> Self {
        Extractor { headers, employer }
    }

    /// Produces the record for one document. Documents are independent:
    /// nothing here carries state across calls.
    pub fn extract(&self, doc: &RawDocument) -> CandidateRecord {
        if doc.is_empty() {
            // decode-failure sentinel: nothing to scan
            return CandidateRecord::default();
        }

        let contact_anchor = section::locate_section(doc, &self.headers, SectionKind::Contact);
        let experience_anchor =
            section::locate_section(doc, &self.headers, SectionKind::Experience);
        let education_anchor = section::locate_section(doc, &self.headers, SectionKind::Education);
        debug!(
            "anchors: contact={contact_anchor:?} experience={experience_anchor:?} education={education_anchor:?}"
        );

        let (name, linkedin_url) = contact::extract_name_and_url(doc, contact_anchor.unwrap_or(0));

        let (position, work_length) = match experience_anchor {
            Some(anchor) => {
                let anchor = section::adjust_experience_anchor(doc, anchor, &self.employer);
                experience::extract_role(doc, anchor)
            }
            None => (String::new(), String::new()),
        };

        let (education, degree, graduation_year) = match education_anchor {
            Some(anchor) => education::extract_education(doc, &self.headers, anchor),
            None => (String::new(), String::new(), String::new()),
        };

        self.scrub(CandidateRecord {
            name,
            linkedin_url,
            position,
            work_length,
            education,
            degree,
            graduation_year,
        })
    }

    /// Record invariant: no field is a literal header string. The
    /// extractors already avoid them; a duplicated-header artifact that
    /// still lands in a field is blanked rather than shipped.
    fn scrub(&self, mut record: CandidateRecord) -> CandidateRecord {
        for field in [
            &mut record.name,
            &mut record.linkedin_url,
            &mut record.position,
            &mut record.work_length,
            &mut record.education,
            &mut record.degree,
            &mut record.graduation_year,
        ] {
            if self.headers.is_header_line(field) {
                field.clear();
            }
        }
        record
    }
}
