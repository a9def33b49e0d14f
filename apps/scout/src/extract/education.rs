use crate::extract::has_digit;
use crate::extract::headers::HeaderTable;
use crate::extract::year::resolve_latest_year;
use crate::models::document::RawDocument;

/// Artifact left by the exporter when an entry spans a page break.
const PAGE_MARKER: &str = "Page";

/// (institution, degree, graduation year) from the block after the
/// education anchor.
///
/// The institution is the first non-empty, digit-free line after the anchor
/// that is not itself a header line (exports sometimes print the section
/// header twice). No qualifying line before document end leaves all three
/// fields empty.
pub fn extract_education(
    doc: &RawDocument,
    headers: &HeaderTable,
    anchor: usize,
) -> (String, String, String) {
    let start = anchor + 1;
    let Some((inst_idx, institution)) = institution_line(doc, headers, start) else {
        return (String::new(), String::new(), String::new());
    };

    let degree = degree_after(doc, inst_idx);
    let year = resolve_latest_year(doc, headers, start);
    (institution, degree, year)
}

fn institution_line(
    doc: &RawDocument,
    headers: &HeaderTable,
    start: usize,
) -> Option<(usize, String)> {
    doc.lines()
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| {
            !line.trim().is_empty() && !has_digit(line) && !headers.is_header_line(line)
        })
        .map(|(idx, line)| (idx, line.trim().to_string()))
}

/// Degree line scan. The line right after the institution is the degree;
/// only when that line is blank does the scan advance, skipping blanks and
/// `Page N of M` artifacts until a qualifying line or document end.
fn degree_after(doc: &RawDocument, inst_idx: usize) -> String {
    let Some(immediate) = doc.line(inst_idx + 1) else {
        return String::new();
    };

    let mut degree = immediate.trim().to_string();
    if degree.is_empty() {
        let mut idx = inst_idx + 2;
        loop {
            let Some(line) = doc.line(idx) else {
                // ran off the end: no degree line in this entry
                return String::new();
            };
            let candidate = line.trim();
            if !candidate.is_empty() && !candidate.contains(PAGE_MARKER) {
                degree = candidate.to_string();
                break;
            }
            idx += 1;
        }
    }
    clean_degree(&degree)
}

/// Truncates at the first middle dot and trims the tail, so
/// `Bachelor of Commerce · BCom` becomes `Bachelor of Commerce`.
/// Idempotent.
pub fn clean_degree(degree: &str) -> String {
    match degree.split_once('·') {
        Some((before, _)) => before.trim_end().to_string(),
        None => degree.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> RawDocument {
        RawDocument::from_text(lines.join("\n"))
    }

    fn extract(lines: &[&str]) -> (String, String, String) {
        extract_education(&doc(lines), &HeaderTable::default(), 0)
    }

    #[test]
    fn test_full_entry_extracts_all_three_fields() {
        let (institution, degree, year) = extract(&[
            "Education",
            "Keio University",
            "Bachelor of Commerce · BCom",
            "(April 2010 - March 2014)",
        ]);
        assert_eq!(institution, "Keio University");
        assert_eq!(degree, "Bachelor of Commerce");
        assert_eq!(year, "2014");
    }

    #[test]
    fn test_institution_skips_blank_and_digit_lines() {
        let (institution, _, _) = extract(&["Education", "", "est. 1858", "Keio University", "BCom"]);
        assert_eq!(institution, "Keio University");
    }

    #[test]
    fn test_institution_skips_full_width_digit_lines() {
        let (institution, _, _) = extract(&["学歴", "１８５８年創立", "慶應義塾大学", "商学士"]);
        assert_eq!(institution, "慶應義塾大学");
    }

    #[test]
    fn test_institution_skips_duplicated_header_line() {
        let (institution, degree, _) =
            extract(&["Education", "Education", "Keio University", "BCom"]);
        assert_eq!(institution, "Keio University");
        assert_eq!(degree, "BCom");
    }

    #[test]
    fn test_no_qualifying_institution_leaves_all_empty() {
        let (institution, degree, year) = extract(&["Education", "class of 2019", "批次 7"]);
        assert_eq!(institution, "");
        assert_eq!(degree, "");
        // year stays empty with the rest of the entry
        assert_eq!(year, "");
    }

    #[test]
    fn test_degree_scan_skips_blank_and_pagination_lines() {
        let (institution, degree, _) = extract(&[
            "Education",
            "Oxford University",
            "",
            "Page 1 of 2",
            "",
            "MSc Economics",
        ]);
        assert_eq!(institution, "Oxford University");
        assert_eq!(degree, "MSc Economics");
    }

    #[test]
    fn test_pagination_skip_engages_only_after_blank() {
        // a pagination line sitting directly under the institution is taken
        // verbatim; the skip only starts from a blank degree line
        let (_, degree, _) = extract(&["Education", "Oxford University", "Page 2 of 3"]);
        assert_eq!(degree, "Page 2 of 3");
    }

    #[test]
    fn test_degree_missing_at_document_end_is_empty() {
        let (institution, degree, _) = extract(&["Education", "Keio University"]);
        assert_eq!(institution, "Keio University");
        assert_eq!(degree, "");
    }

    #[test]
    fn test_degree_scan_running_off_the_end_is_empty() {
        let (_, degree, _) = extract(&["Education", "Keio University", "", "Page 1 of 1"]);
        assert_eq!(degree, "");
    }

    #[test]
    fn test_institution_is_trimmed() {
        let (institution, _, _) = extract(&["Education", "  Keio University  ", "BCom"]);
        assert_eq!(institution, "Keio University");
    }

    #[test]
    fn test_year_ignores_later_education_entries() {
        let (_, _, year) = extract(&[
            "Education",
            "Keio University",
            "BCom · Commerce",
            "(2012 - 2016)",
            "Formation",
            "Lycée Henri-IV",
            "(2008 - 2011)",
        ]);
        // the second entry starts at the "Formation" header; 2016 wins
        // within the first block even though 2011 appears later
        assert_eq!(year, "2016");
    }

    #[test]
    fn test_clean_degree_truncates_at_middle_dot() {
        assert_eq!(clean_degree("Bachelor of Commerce · BCom"), "Bachelor of Commerce");
        assert_eq!(clean_degree("MSc"), "MSc");
    }

    #[test]
    fn test_clean_degree_is_idempotent() {
        let once = clean_degree("Master of Arts · MA · History");
        let twice = clean_degree(&once);
        assert_eq!(once, "Master of Arts");
        assert_eq!(once, twice);
    }
}
