//! Rule tables for American English (`en_us`).
//!
//! Rules are scanned with last match wins, so each list starts with its
//! most general fallback and ends with its most specific irregulars.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{BoundaryPatterns, Rule, RuleTable};

const PLURAL_TO_SINGULAR: &[(&str, &str)] = &[
    ("(.)s$", "${1}"),
    ("(la)ses$", "${1}s"),
    ("([^aeiou])ies$", "${1}y"),
    ("([aeiou]y)s$", "${1}"),
    ("([nlw]i)ves$", "${1}fe"),
    ("(ar)ves$", "${1}f"),
    ("([^d]ea)ves$", "${1}f"),
    ("([aeo]l)ves$", "${1}f"),
    ("(ss)es$", "${1}"),
    ("([cs]h)es$", "${1}"),
    ("((?<!o)[ieu]s|[ieuo]x)es$", "${1}"),
    ("(^|[^h]|(?<!s)h)oes$", "${1}o"),
    ("(m)en$", "${1}an"),
    ("(p)eople$", "${1}erson"),
    ("(c)hildren$", "${1}hild"),
    ("(q)uizzes$", "${1}uiz"),
    ("(media|info(rmation)?|news)$", "${1}"),
    ("([ml])ice$", "${1}ouse"),
];

const SINGULAR_TO_PLURAL: &[(&str, &str)] = &[
    ("(.)$", "${1}s"),
    ("s$", "ses"),
    ("([^o])o$", "${1}oes"),
    ("([^aeiou])y$", "${1}ies"),
    ("([aeiou]y)$", "${1}s"),
    ("([nlw]i)fe$", "${1}ves"),
    ("(ar)f$", "${1}ves"),
    ("([^d]ea)f$", "${1}ves"),
    ("([aeo]l)f$", "${1}ves"),
    ("(ss)$", "${1}es"),
    ("([cs]h)$", "${1}es"),
    ("([ieu]s|[ieuo]x)$", "${1}es"),
    ("(m)an$", "${1}en"),
    ("(p)erson$", "${1}eople"),
    ("(c)hild$", "${1}hildren"),
    ("^(q)uiz$", "${1}uizzes"),
    ("(phot|log|vide)o$", "${1}os"),
    ("(media|info(rmation)?|news)$", "${1}"),
    ("([ml])ouse$", "${1}ice"),
];

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Splits off the final run of digits or capitalized word.
const LAST_WORD: &str =
    r"(.*)((?:(?<=[a-zA-Z_])|^)(?:[0-9]+|[A-Z][a-z]*)|(?:(?<=[0-9A-Z_])|^)(?:[A-Z][a-z]*))$";

const WORD_START: &str = r"(?i)_([a-z0-9])";

/// An uppercase letter following a lowercase one.
const WORD_BOUNDARY: &str = r"(?<=[a-z])([A-Z])";

/// An uppercase letter after another uppercase letter that is followed by a
/// lowercase letter other than `s`, or by `s` and another letter. A trailing
/// `s` alone marks a plural acronym rather than a new word.
const ACRONYM_BOUNDARY: &str = r"(?<=[A-Z])([A-Z])(?=([a-rt-z]|s[a-z]))";

static BOUNDARIES: LazyLock<BoundaryPatterns> = LazyLock::new(|| {
    BoundaryPatterns::new(LAST_WORD, WORD_START, WORD_BOUNDARY, ACRONYM_BOUNDARY)
        .expect("english boundary patterns should compile")
});

static TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    RuleTable::builder()
        .plural_to_singular(compile(PLURAL_TO_SINGULAR))
        .singular_to_plural(BTreeMap::from([(2, compile(SINGULAR_TO_PLURAL))]))
        .digit_words(
            DIGIT_WORDS
                .iter()
                .zip(0u8..)
                .map(|(word, digit)| (digit, (*word).to_string()))
                .collect(),
        )
        .boundaries(BOUNDARIES.clone())
        .build()
});

fn compile(rules: &[(&str, &str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            Rule::new(pattern, replacement).expect("english rule patterns should compile")
        })
        .collect()
}

/// The shared English boundary patterns.
pub fn boundary_patterns() -> &'static BoundaryPatterns {
    &BOUNDARIES
}

/// The shared English rule table.
pub fn rule_table() -> &'static RuleTable {
    &TABLE
}
