//! Rule tables for inflection and case conversion.
//!
//! A [`RuleTable`] holds everything a locale variant needs to transform
//! tokens: ordered plural/singular rules, quantity tiers, literal exceptions,
//! spelled-out digits and the boundary patterns used to split identifiers.
//! Tables are immutable once built.

pub mod english;

use std::collections::{BTreeMap, HashMap};

use bon::Builder;
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

use crate::engine::TextError;

/// A pattern/replacement pair described as plain data.
///
/// Replacements use `${1}` style group references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSource {
    pub pattern: String,
    pub replacement: String,
}

impl RuleSource {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// A compiled inflection rule.
///
/// Patterns are matched case-insensitively against the last word of a token;
/// `$` anchors at the very end of the word.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule from a pattern and a replacement.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, TextError> {
        let regex = compile(&format!("(?i){pattern}"))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// The pattern as declared, without flags.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns the rewritten word if this rule matches it.
    pub fn apply(&self, word: &str) -> Result<Option<String>, TextError> {
        let matched = self.regex.is_match(word).map_err(|source| TextError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        if !matched {
            return Ok(None);
        }
        Ok(Some(
            self.regex
                .replace_all(word, self.replacement.as_str())
                .into_owned(),
        ))
    }
}

/// Scans `rules` in declared order and returns the rewrite of the last rule
/// that matched.
///
/// Every matching rule overwrites the candidate, so with overlapping
/// patterns the one declared later wins. Tables list general fallbacks first
/// and the most specific rules last.
pub fn apply_last_match(rules: &[Rule], word: &str) -> Result<Option<String>, TextError> {
    let mut candidate = None;
    for rule in rules {
        if let Some(rewritten) = rule.apply(word)? {
            candidate = Some(rewritten);
        }
    }
    Ok(candidate)
}

/// Patterns that locate word boundaries inside compact identifiers.
#[derive(Debug, Clone)]
pub struct BoundaryPatterns {
    /// Captures everything before the last word as group 1 and the last word
    /// as group 2.
    pub last_word: Regex,
    /// Matches an underscore followed by the character that starts the next
    /// word (group 1).
    pub word_start: Regex,
    /// Matches an uppercase letter (group 1) that begins a new word after a
    /// lowercase letter.
    pub word_boundary: Regex,
    /// Matches an uppercase letter (group 1) that ends an acronym and begins
    /// a new word.
    pub acronym_boundary: Regex,
}

impl BoundaryPatterns {
    /// Compile a set of boundary patterns.
    pub fn new(
        last_word: &str,
        word_start: &str,
        word_boundary: &str,
        acronym_boundary: &str,
    ) -> Result<Self, TextError> {
        Ok(Self {
            last_word: compile(last_word)?,
            word_start: compile(word_start)?,
            word_boundary: compile(word_boundary)?,
            acronym_boundary: compile(acronym_boundary)?,
        })
    }
}

impl Default for BoundaryPatterns {
    fn default() -> Self {
        english::boundary_patterns().clone()
    }
}

/// The rule tables of one locale variant.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use textform::rules::{Rule, RuleTable};
///
/// let table = RuleTable::builder()
///     .plural_to_singular(vec![Rule::new("(.)s$", "${1}").unwrap()])
///     .singular_to_plural(BTreeMap::from([(2, vec![Rule::new("(.)$", "${1}s").unwrap()])]))
///     .build();
///
/// assert_eq!(table.tier_threshold(5), Some(2));
/// assert_eq!(table.tier_threshold(1), None);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct RuleTable {
    /// Plural to singular rules, scanned with last match wins.
    plural_to_singular: Vec<Rule>,

    /// Singular to plural rule sets keyed by the lowest quantity they apply to.
    singular_to_plural: BTreeMap<usize, Vec<Rule>>,

    /// Literal camelize replacements checked before the generic algorithm.
    #[builder(default)]
    camelize_exceptions: HashMap<String, String>,

    /// Literal underscorize replacements checked before the generic algorithm.
    #[builder(default)]
    underscorize_exceptions: HashMap<String, String>,

    /// Spelled-out forms of the digits 0 through 9.
    #[builder(default)]
    digit_words: BTreeMap<u8, String>,

    #[builder(default)]
    boundaries: BoundaryPatterns,
}

impl RuleTable {
    /// Compile a list of rule sources, preserving order.
    pub fn compile_rules(sources: &[RuleSource]) -> Result<Vec<Rule>, TextError> {
        sources
            .iter()
            .map(|source| Rule::new(&source.pattern, &source.replacement))
            .collect()
    }

    pub fn plural_to_singular(&self) -> &[Rule] {
        &self.plural_to_singular
    }

    pub fn singular_to_plural(&self) -> &BTreeMap<usize, Vec<Rule>> {
        &self.singular_to_plural
    }

    /// Returns the largest tier threshold that is less than or equal to
    /// `quantity`.
    pub fn tier_threshold(&self, quantity: usize) -> Option<usize> {
        self.singular_to_plural
            .range(..=quantity)
            .next_back()
            .map(|(threshold, _)| *threshold)
    }

    /// Returns the rule set that applies to `quantity`.
    pub fn tier_for(&self, quantity: usize) -> Option<&[Rule]> {
        self.singular_to_plural
            .range(..=quantity)
            .next_back()
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn camelize_exception(&self, token: &str) -> Option<&str> {
        self.camelize_exceptions.get(token).map(String::as_str)
    }

    pub fn underscorize_exception(&self, token: &str) -> Option<&str> {
        self.underscorize_exceptions.get(token).map(String::as_str)
    }

    /// Spelled-out word for a single digit.
    pub fn digit_word(&self, digit: usize) -> Option<&str> {
        u8::try_from(digit)
            .ok()
            .and_then(|d| self.digit_words.get(&d))
            .map(String::as_str)
    }

    pub fn boundaries(&self) -> &BoundaryPatterns {
        &self.boundaries
    }
}

fn compile(pattern: &str) -> Result<Regex, TextError> {
    Regex::new(pattern).map_err(|source| TextError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}
