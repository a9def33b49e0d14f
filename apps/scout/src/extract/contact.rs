//! Name and profile URL recovery. PDF exports wrap the profile link across
//! two lines (`www.linkedin.com/in/jane-` then `doe-12ab34 (LinkedIn)`), so
//! the name and the URL tail are both reassembled from the pair.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::has_digit;
use crate::models::document::RawDocument;

static PROFILE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"www\.linkedin\.com/in[^\s()]+").unwrap());

/// Marker the exporter prints on the line carrying the wrapped URL tail.
const ANNOTATION_MARKER: &str = "LinkedIn)";
const BARE_ANNOTATION: &str = "(LinkedIn)";

/// Derives (full name, profile URL) for a document. `scan_from` is the
/// contact anchor when one was located, else 0. No URL-shaped token in the
/// document means both outputs are empty; every other missing piece
/// degrades field by field.
pub fn extract_name_and_url(doc: &RawDocument, scan_from: usize) -> (String, String) {
    let Some(url_match) = PROFILE_URL.find(doc.text()) else {
        return (String::new(), String::new());
    };
    let url_prefix = url_match.as_str();

    let first = first_name_token(url_prefix);
    let (last, url_suffix) = annotation_line_parts(doc, scan_from);

    let name = clean_name(&format!("{} {}", capitalize(&first), capitalize(&last)));
    let url = format!("{url_prefix}{url_suffix}");
    (name, url)
}

/// Provisional first name: the trailing path segment of the URL match, with
/// the line-wrap hyphen stripped when present.
fn first_name_token(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or("");
    segment.strip_suffix('-').unwrap_or(segment).to_string()
}

/// Finds the first line from `scan_from` carrying the annotation marker and
/// derives the last-name token and the URL suffix from it.
fn annotation_line_parts(doc: &RawDocument, scan_from: usize) -> (String, String) {
    let Some(line) = doc
        .lines()
        .iter()
        .skip(scan_from)
        .find(|line| line.contains(ANNOTATION_MARKER))
    else {
        return (String::new(), String::new());
    };

    let last = last_name_token(line);

    // everything before the first whitespace is the wrapped URL tail,
    // unless the line is only the bare annotation
    let url_suffix = line.split(char::is_whitespace).next().unwrap_or("");
    let url_suffix = if url_suffix == BARE_ANNOTATION {
        ""
    } else {
        url_suffix
    };

    (last, url_suffix.to_string())
}

/// Last-name token rules for the annotation line. Exports append a
/// disambiguating identifier after a final hyphen (`doe-12ab34`), so a
/// hyphenated line keeps everything before its final hyphen segment. An
/// unhyphenated multi-token line keeps all but the final token, discarded
/// entirely when a digit survives in it.
fn last_name_token(line: &str) -> String {
    if line.contains('-') {
        match line.rsplit_once('-') {
            Some((before, _)) => before.trim().to_string(),
            None => String::new(),
        }
    } else {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return String::new();
        }
        let candidate = tokens[..tokens.len() - 1].join(" ");
        if has_digit(&candidate) {
            String::new()
        } else {
            candidate
        }
    }
}

/// First character uppercased, remainder lowercased.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalizes the combined name: trim, and when a hyphen survives (URL
/// slugs carry them through), rewrite hyphens to spaces, capitalize each
/// token, and keep the first two.
fn clean_name(name: &str) -> String {
    let name = name.trim();
    if !name.contains('-') {
        return name.to_string();
    }
    let spaced = name.replace('-', " ");
    let tokens: Vec<String> = spaced.split_whitespace().map(capitalize).collect();
    tokens
        .into_iter()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}
