//! Identifier casing used by generated audit types.
//!
//! Two conventions are interconverted:
//! - *delimited*: lowercase words joined by `_` (`car_make`), used for
//!   backing fields and setter parameters;
//! - *compact*: leading-lowercase with medial capitals (`carMake`), used for
//!   column names and accessor methods.

use convert_case::{Case, Casing};

/// Word separator of the delimited form.
pub const DELIMITER: char = '_';

// to_delimited_form
/// Convert a compact identifier into its delimited form.
///
/// Input that already contains the delimiter is only lowercased. Otherwise
/// every maximal run of an optional ASCII uppercase letter followed by ASCII
/// lowercase letters is taken as a word; anything outside those runs (digits,
/// isolated capitals) is dropped. Input without any such run yields an empty
/// string.
#[must_use]
pub fn to_delimited_form(s: &str) -> String {
    if s.contains(DELIMITER) {
        return s.to_lowercase();
    }

    let words = camel_words(s);
    let mut out = String::with_capacity(s.len() + words.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(word);
    }

    out.to_lowercase()
}

// to_compact_form
/// Convert a delimited identifier into its compact form.
///
/// Input without the delimiter is returned unchanged. A single leading
/// delimiter is ignored, the first segment is lowercased, and each later
/// segment only has its first character capitalized.
#[must_use]
pub fn to_compact_form(s: &str) -> String {
    if !s.contains(DELIMITER) {
        return s.to_string();
    }

    let trimmed = s.strip_prefix(DELIMITER).unwrap_or(s);
    let mut segments = trimmed.split(DELIMITER);
    let mut out = String::with_capacity(s.len());

    if let Some(first) = segments.next() {
        out.push_str(&first.to_lowercase());
    }
    for segment in segments {
        out.push_str(&capitalize(segment));
    }

    out
}

// capitalize_first
/// Uppercase the first character of `s`, passing `None` through.
#[must_use]
pub fn capitalize_first(s: Option<&str>) -> Option<String> {
    s.map(capitalize)
}

/// Uppercase the first character and keep the remainder as-is.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `s` already reads as a PascalCase type name.
#[must_use]
pub fn is_pascal_case(s: &str) -> bool {
    !s.is_empty() && s.to_case(Case::Pascal) == s
}

// camel_words
// leftmost-longest scan for `[A-Z]?[a-z]+`
fn camel_words(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let mut j = i;
        if bytes[j].is_ascii_uppercase() {
            j += 1;
        }

        let lower_start = j;
        while j < bytes.len() && bytes[j].is_ascii_lowercase() {
            j += 1;
        }

        if j > lower_start {
            words.push(&s[start..j]);
            i = j;
        } else {
            i += 1;
        }
    }

    words
}

///
/// TESTS
///
