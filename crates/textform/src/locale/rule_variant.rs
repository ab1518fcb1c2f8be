//! A variant assembled from data.

use bon::Builder;
use icu_locale_core::LanguageIdentifier;

use crate::locale::{DEFAULT_DOMAIN, Variant};
use crate::rules::RuleTable;

/// A locale variant defined entirely by a [`RuleTable`] and a few settings.
///
/// Covers languages whose behavior differs from English only in data. Any
/// transform a language needs beyond its rule table calls for a dedicated
/// [`Variant`] implementation instead.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use icu_locale_core::langid;
/// use textform::{RuleSource, RuleTable, RuleVariant, Variant};
///
/// let rules = RuleTable::builder()
///     .plural_to_singular(RuleTable::compile_rules(&[RuleSource::new("en$", "")]).unwrap())
///     .singular_to_plural(BTreeMap::from([(
///         2,
///         RuleTable::compile_rules(&[RuleSource::new("$", "en")]).unwrap(),
///     )]))
///     .build();
///
/// let variant = RuleVariant::builder()
///     .locale("xx_yy")
///     .language(langid!("en"))
///     .rules(rules)
///     .final_join_separator("&")
///     .build();
///
/// assert_eq!(variant.locale(), "xx_yy");
/// assert_eq!(variant.final_join_separator(), "&");
/// assert!(variant.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct RuleVariant {
    /// Lowercase locale name, e.g. `de_de`.
    locale: String,

    /// Language used for case folding.
    language: LanguageIdentifier,

    rules: RuleTable,

    #[builder(default)]
    right_to_left: bool,

    #[builder(default = ", ".to_string())]
    join_separator: String,

    #[builder(default = "and".to_string())]
    final_join_separator: String,

    #[builder(default = DEFAULT_DOMAIN.to_string())]
    default_domain: String,
}

impl Variant for RuleVariant {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    fn rules(&self) -> &RuleTable {
        &self.rules
    }

    fn right_to_left(&self) -> bool {
        self.right_to_left
    }

    fn join_separator(&self) -> &str {
        &self.join_separator
    }

    fn final_join_separator(&self) -> &str {
        &self.final_join_separator
    }

    fn default_domain(&self) -> &str {
        &self.default_domain
    }
}
