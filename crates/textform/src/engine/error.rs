//! Error types for text transformation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// The inflection operation that failed to find a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inflection {
    Pluralize,
    Singularize,
}

impl Display for Inflection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Inflection::Pluralize => f.write_str("pluralized"),
            Inflection::Singularize => f.write_str("singularized"),
        }
    }
}

/// An error raised while constructing, transforming or composing text.
#[derive(Debug, Error)]
pub enum TextError {
    /// The value cannot be normalized into a text container.
    #[error("invalid value passed to text operation: {reason}")]
    InvalidValue { reason: String },

    /// No rule in the active rule set matched the token.
    #[error("the string '{token}' could not be {operation}")]
    NoRule {
        operation: Inflection,
        token: String,
    },

    /// No singular-to-plural tier covers the requested quantity.
    #[error("no pluralization rule tier applies to quantity {quantity}")]
    NoRuleTier { quantity: usize },

    /// No variant is mapped to the requested locale.
    #[error(
        "cannot create text with locale '{locale}', no variant available{}",
        format_suggestions(suggestions)
    )]
    UnknownLocale {
        locale: String,
        suggestions: Vec<String>,
    },

    /// The variant mapped to the locale does not satisfy the capability set.
    #[error("cannot create text with locale '{locale}', invalid variant: {reason}")]
    InvalidVariant { locale: String, reason: String },

    /// A compose hook was registered with an unknown timing.
    #[error("the timing specified, '{timing}', is not a valid timing. Must be one of: pre, post")]
    InvalidHookTiming { timing: String },

    /// A rule or boundary pattern failed to compile or run.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    /// A message could not be interpolated.
    #[error("cannot compose message: {message}")]
    Format { message: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Returns up to three names from `available` that are close to `key`,
/// closest first.
///
/// Keys of three characters or fewer tolerate one edit, longer keys two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
