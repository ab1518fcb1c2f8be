//! Rule-based noun inflection.

use crate::engine::TextError;
use crate::locale::Variant;
use crate::rules::apply_last_match;

/// Pluralize the last word of `token` for `quantity`.
///
/// Uses the rule tier with the largest threshold not above `quantity`.
/// Returns `Ok(None)` when no rule of that tier matches, and
/// [`TextError::NoRuleTier`] when no tier covers `quantity` at all.
pub fn pluralize<V: Variant + ?Sized>(
    variant: &V,
    token: &str,
    quantity: usize,
) -> Result<Option<String>, TextError> {
    let rules = variant
        .rules()
        .tier_for(quantity)
        .ok_or(TextError::NoRuleTier { quantity })?;
    let (prefix, word) = variant.split_last_word(token)?;
    Ok(apply_last_match(rules, &word)?.map(|plural| prefix + &plural))
}

/// Singularize the last word of `token`.
///
/// Returns `Ok(None)` when no rule matches.
pub fn singularize<V: Variant + ?Sized>(
    variant: &V,
    token: &str,
) -> Result<Option<String>, TextError> {
    let (prefix, word) = variant.split_last_word(token)?;
    Ok(apply_last_match(variant.rules().plural_to_singular(), &word)?
        .map(|singular| prefix + &singular))
}
