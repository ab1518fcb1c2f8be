//! The base English variant.

use icu_locale_core::{LanguageIdentifier, langid};

use crate::locale::Variant;
use crate::rules::{RuleTable, english};

/// Locale served directly by [`EnglishVariant`], without a registry mapping.
pub const BASE_LOCALE: &str = "en_us";

static ENGLISH: LanguageIdentifier = langid!("en");

/// US English: the base variant every other variant is measured against.
///
/// Uses the built-in English rule table, a single plural tier for quantities
/// of two and up, and left-to-right joins with `", "` and `"and"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishVariant;

impl Variant for EnglishVariant {
    fn locale(&self) -> &str {
        BASE_LOCALE
    }

    fn language(&self) -> &LanguageIdentifier {
        &ENGLISH
    }

    fn rules(&self) -> &RuleTable {
        english::rule_table()
    }
}
