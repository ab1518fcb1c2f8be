//! Unicode case folding for a language.
//!
//! Thin adapter over ICU4X case mapping. Every function works on code points
//! (and, for the first-letter helpers, on the first extended grapheme
//! cluster), never on bytes.

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercase the whole string.
pub fn to_lower(s: &str, lang: &LanguageIdentifier) -> String {
    String::from(CaseMapper::new().lowercase_to_string(s, lang))
}

/// Uppercase the whole string.
pub fn to_upper(s: &str, lang: &LanguageIdentifier) -> String {
    String::from(CaseMapper::new().uppercase_to_string(s, lang))
}

/// Uppercase the first grapheme, leaving the rest untouched.
pub fn capitalize_first(s: &str, lang: &LanguageIdentifier) -> String {
    map_first_grapheme(s, |first| to_upper(first, lang))
}

/// Lowercase the first grapheme, leaving the rest untouched.
pub fn lower_first(s: &str, lang: &LanguageIdentifier) -> String {
    map_first_grapheme(s, |first| to_lower(first, lang))
}

/// Returns true if lowercasing would not change `s`.
pub fn is_lower(s: &str, lang: &LanguageIdentifier) -> bool {
    to_lower(s, lang) == s
}

fn map_first_grapheme(s: &str, f: impl FnOnce(&str) -> String) -> String {
    let Some(first) = s.graphemes(true).next() else {
        return String::new();
    };
    let mut result = f(first);
    result.push_str(&s[first.len()..]);
    result
}
