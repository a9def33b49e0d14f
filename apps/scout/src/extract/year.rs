use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::headers::HeaderTable;
use crate::models::document::RawDocument;

// Plausible graduation window. Years outside it are treated as numeric
// noise, trading recall for precision.
const YEAR_MIN: u16 = 2013;
const YEAR_MAX: u16 = 2023;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Most recent plausible graduation year in the block starting at `start`.
///
/// The block ends just before the first line containing any education
/// header (the start of the next education entry) or at end of document.
/// Returns the maximum candidate year as a string, or "" when the block has
/// none.
pub fn resolve_latest_year(doc: &RawDocument, headers: &HeaderTable, start: usize) -> String {
    let mut block = String::new();
    for line in doc.lines().iter().skip(start) {
        if headers.contains_education_header(line) {
            break;
        }
        block.push_str(line);
        // newline join keeps digit runs from welding across line breaks
        block.push('\n');
    }
    latest_year_in(&block)
}

/// Candidate years are standalone four-digit numerals: maximal digit runs
/// of exactly four characters, parsed and bounded to the plausible window.
/// A three- or five-digit run next to a real year never perturbs the
/// result.
fn latest_year_in(text: &str) -> String {
    DIGIT_RUN
        .find_iter(text)
        .map(|run| run.as_str())
        .filter(|digits| digits.len() == 4)
        .filter_map(|digits| digits.parse::<u16>().ok())
        .filter(|year| (YEAR_MIN..=YEAR_MAX).contains(year))
        .max()
        .map(|year| year.to_string())
        .unwrap_or_default()
}
