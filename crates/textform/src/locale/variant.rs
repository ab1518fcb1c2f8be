//! The capability set every locale variant provides.

use icu_locale_core::LanguageIdentifier;

use crate::engine::{TextError, case, inflect, split};
use crate::rules::RuleTable;
use crate::types::VariantId;

/// Message domain used by `compose` when the caller gives none.
pub const DEFAULT_DOMAIN: &str = "messages";

/// A locale-specific bundle of rule tables and transform behavior.
///
/// Implementors supply the locale name, language and [`RuleTable`]; every
/// transform has a default implementation driven by that table, and a
/// variant overrides only the steps its language needs. The base English
/// implementation is [`EnglishVariant`](super::EnglishVariant).
///
/// Results of the `*_token` methods are memoized by [`Text`](crate::Text)
/// per variant, so implementations must be deterministic.
pub trait Variant: Send + Sync {
    /// Normalized (lowercase) locale name, e.g. `en_us`.
    fn locale(&self) -> &str;

    /// Language used for case folding.
    fn language(&self) -> &LanguageIdentifier;

    fn rules(&self) -> &RuleTable;

    /// Cache identity for texts built directly with
    /// [`Text::with_variant`](crate::Text::with_variant).
    fn id(&self) -> VariantId {
        VariantId::from_locale(self.locale())
    }

    /// Whether joined values are presented right to left.
    fn right_to_left(&self) -> bool {
        false
    }

    fn join_separator(&self) -> &str {
        ", "
    }

    /// Word placed, space-padded, before the last joined value.
    fn final_join_separator(&self) -> &str {
        "and"
    }

    fn default_domain(&self) -> &str {
        DEFAULT_DOMAIN
    }

    /// Split a token into its prefix and last word.
    fn split_last_word(&self, token: &str) -> Result<(String, String), TextError> {
        split::split_last_word(self, token)
    }

    fn camelize_token(&self, token: &str, upper: bool) -> Result<String, TextError> {
        case::camelize(self, token, upper)
    }

    fn underscorize_token(&self, token: &str) -> Result<String, TextError> {
        case::underscorize(self, token)
    }

    fn dashize_token(&self, token: &str) -> Result<String, TextError> {
        case::dashize(self, token)
    }

    /// Produce the human-readable form of a token.
    ///
    /// The base implementation returns the token unchanged; languages with
    /// humanization rules override it.
    fn humanize_token(&self, token: &str) -> Result<String, TextError> {
        Ok(token.to_string())
    }

    /// Pluralize a token for `quantity`, or `None` if no rule matches.
    fn pluralize_token(&self, token: &str, quantity: usize) -> Result<Option<String>, TextError> {
        inflect::pluralize(self, token, quantity)
    }

    /// Singularize a token, or `None` if no rule matches.
    fn singularize_token(&self, token: &str) -> Result<Option<String>, TextError> {
        inflect::singularize(self, token)
    }

    /// Check that this variant can serve text operations.
    fn validate(&self) -> Result<(), String> {
        if self.locale().is_empty() {
            return Err("locale name is empty".to_string());
        }
        if self.locale() != self.locale().to_lowercase() {
            return Err(format!("locale name '{}' is not lowercase", self.locale()));
        }
        let rules = self.rules();
        if rules.singular_to_plural().is_empty() {
            return Err("no singular to plural rule tiers".to_string());
        }
        if rules.singular_to_plural().values().any(Vec::is_empty) {
            return Err("empty singular to plural rule tier".to_string());
        }
        if rules.plural_to_singular().is_empty() {
            return Err("no plural to singular rules".to_string());
        }
        Ok(())
    }
}
