use crate::extract::headers::{HeaderTable, SectionKind};
use crate::models::document::RawDocument;

/// Index of the first line whose trimmed content exactly equals a registered
/// header for `kind`, or `None` when the section is absent.
pub fn locate_section(
    doc: &RawDocument,
    headers: &HeaderTable,
    kind: SectionKind,
) -> Option<usize> {
    doc.lines()
        .iter()
        .position(|line| headers.matches(kind, line))
}

/// Re-anchors the experience section when a spacer line follows the header.
///
/// Some layouts insert a blank visual spacer between the section header and
/// the employer block. When `anchor + 1` is blank, scan forward for a line
/// equal (trimmed) to the employer name and return the index one before it,
/// so the employer sits at `anchor + 1` in both layouts and the fixed field
/// offsets read the same lines either way. The scan stops at end of
/// document; when the employer never recurs the unadjusted anchor is
/// returned. An employer printed in a different language than configured
/// will not match and falls back the same way.
pub fn adjust_experience_anchor(doc: &RawDocument, anchor: usize, employer: &str) -> usize {
    let Some(next) = doc.line(anchor + 1) else {
        // anchor on the last line: nothing to adjust
        return anchor;
    };
    if !next.trim().is_empty() {
        return anchor;
    }

    let employer = employer.trim();
    for idx in anchor + 1..doc.len() {
        if doc.line(idx).map(str::trim) == Some(employer) {
            return idx.saturating_sub(1);
        }
    }
    anchor
}
