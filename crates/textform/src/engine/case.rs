//! Case conversion between `camelCase`, `underscore_notation`,
//! `dash-notation` and spaced phrases.

use std::sync::LazyLock;

use fancy_regex::Captures;
use regex::Regex;

use crate::engine::TextError;
use crate::engine::case_fold::{capitalize_first, is_lower, lower_first, to_lower, to_upper};
use crate::locale::Variant;

/// Runs of whitespace or hyphens separating the words of a phrase.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-]+").expect("separator pattern should compile"));

/// Convert a token to `camelCase`, or `UpperCamelCase` when `upper` is set.
///
/// Literal exceptions in the variant's rule table win. Spaced and hyphenated
/// phrases are lowercased and joined with underscores first; every letter or
/// digit following an underscore is then uppercased and the underscore
/// dropped.
pub fn camelize<V: Variant + ?Sized>(
    variant: &V,
    token: &str,
    upper: bool,
) -> Result<String, TextError> {
    let lang = variant.language();
    let rules = variant.rules();

    if let Some(exception) = rules.camelize_exception(token) {
        return Ok(if upper {
            capitalize_first(exception, lang)
        } else {
            exception.to_string()
        });
    }

    let normalized = if SEPARATOR_RUN.is_match(token) {
        to_lower(&SEPARATOR_RUN.replace_all(token, "_"), lang)
    } else {
        token.to_string()
    };

    let first = if upper {
        capitalize_first(&normalized, lang)
    } else {
        lower_first(&normalized, lang)
    };
    if !first.contains('_') {
        return Ok(first);
    }

    let word_start = &rules.boundaries().word_start;
    let camelized = word_start.replace_all(&first, |captures: &Captures<'_>| {
        to_upper(captures.get(1).map_or("", |m| m.as_str()), lang)
    });
    Ok(camelized.into_owned())
}

/// Convert a `camelCase`, spaced or hyphenated token to `underscore_notation`.
///
/// Literal exceptions win. Phrases are lowercased with separator runs
/// replaced by a single underscore. Otherwise an underscore is inserted at
/// each word and acronym boundary and the result lowercased. Already
/// lowercase tokens are returned unchanged, which makes the transform
/// idempotent.
pub fn underscorize<V: Variant + ?Sized>(variant: &V, token: &str) -> Result<String, TextError> {
    let lang = variant.language();
    let rules = variant.rules();

    if let Some(exception) = rules.underscorize_exception(token) {
        return Ok(exception.to_string());
    }

    if SEPARATOR_RUN.is_match(token) {
        return Ok(to_lower(&SEPARATOR_RUN.replace_all(token, "_"), lang));
    }

    if is_lower(token, lang) {
        return Ok(token.to_string());
    }

    let boundaries = rules.boundaries();
    let words = boundaries.word_boundary.replace_all(token, "_${1}");
    let acronyms = boundaries.acronym_boundary.replace_all(&words, "_${1}");
    Ok(to_lower(&acronyms, lang))
}

/// Convert a token to `dash-notation`.
pub fn dashize<V: Variant + ?Sized>(variant: &V, token: &str) -> Result<String, TextError> {
    Ok(variant.underscorize_token(token)?.replace('_', "-"))
}
