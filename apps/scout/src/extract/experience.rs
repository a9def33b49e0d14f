use crate::extract::has_digit;
use crate::models::document::RawDocument;

/// Role title and tenure at the configured employer, as (position, tenure).
///
/// After anchoring and spacer adjustment the layout is fixed: employer at
/// `anchor + 1`, then tenure and title at `anchor + 2` and `anchor + 3` in
/// either order. The line carrying a digit is the tenure; `anchor + 2` wins
/// that slot when both qualify, and is the title when neither does. A
/// missing anchor or a document shorter than `anchor + 4` lines yields two
/// empty fields.
pub fn extract_role(doc: &RawDocument, anchor: usize) -> (String, String) {
    let (Some(second), Some(third)) = (doc.line(anchor + 2), doc.line(anchor + 3)) else {
        return (String::new(), String::new());
    };

    if has_digit(second) {
        (third.to_string(), second.to_string())
    } else {
        (second.to_string(), third.to_string())
    }
}
