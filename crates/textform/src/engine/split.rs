//! Word boundary splitting.

use crate::engine::TextError;
use crate::locale::Variant;

/// Split the last word off a spaced phrase, `underscore_notation` or
/// `camelCase` token.
///
/// Separators win over case heuristics: a space splits at the last space,
/// an already-underscorized token splits at its last underscore, and only
/// then is the variant's last-word boundary pattern tried. The prefix keeps
/// its trailing separator so `prefix + word == token`.
pub fn split_last_word<V: Variant + ?Sized>(
    variant: &V,
    token: &str,
) -> Result<(String, String), TextError> {
    if let Some(pos) = token.rfind(' ') {
        return Ok(split_after(token, pos));
    }

    if variant.underscorize_token(token)? == token {
        return Ok(match token.rfind('_') {
            Some(pos) => split_after(token, pos),
            None => (String::new(), token.to_string()),
        });
    }

    let pattern = &variant.rules().boundaries().last_word;
    let captures = pattern
        .captures(token)
        .map_err(|source| TextError::Pattern {
            pattern: pattern.as_str().to_string(),
            source,
        })?;
    if let Some(captures) = captures {
        let prefix = captures.get(1).map_or("", |m| m.as_str());
        let word = captures.get(2).map_or("", |m| m.as_str());
        return Ok((prefix.to_string(), word.to_string()));
    }

    Ok((String::new(), token.to_string()))
}

/// Split after the single-byte separator at `pos`.
fn split_after(token: &str, pos: usize) -> (String, String) {
    let (prefix, word) = token.split_at(pos + 1);
    (prefix.to_string(), word.to_string())
}
