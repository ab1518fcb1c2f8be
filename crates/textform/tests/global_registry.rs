//! Tests for the process-wide registry.
//!
//! Runs in its own test binary so global mappings and hooks stay isolated.

use std::collections::BTreeMap;
use std::sync::Arc;

use icu_locale_core::langid;
use textform::{
    ComposeHook, HookTiming, RuleSource, RuleTable, RuleVariant, Text, TextError, Value,
    components, global,
};

fn pirate() -> RuleVariant {
    let rules = RuleTable::builder()
        .plural_to_singular(RuleTable::compile_rules(&[RuleSource::new("(.)z$", "${1}")]).unwrap())
        .singular_to_plural(BTreeMap::from([(
            2,
            RuleTable::compile_rules(&[RuleSource::new("(.)$", "${1}z")]).unwrap(),
        )]))
        .build();
    RuleVariant::builder()
        .locale("en_pirate")
        .language(langid!("en"))
        .rules(rules)
        .final_join_separator("an'")
        .build()
}

#[test]
fn text_new_uses_base_locale() {
    let text = Text::new("box").unwrap();
    assert_eq!(text.locale(), "en_us");
    assert_eq!(text.pluralize(2).unwrap().to_string(), "boxes");
}

#[test]
fn texts_share_the_global_cache() {
    Text::new("global_cache_entry").unwrap().camelize(true).unwrap();
    assert!(!global::context().cache().is_empty());
}

#[test]
fn global_unknown_locale_fails() {
    let err = textform::create("box", Some("xx_global")).unwrap_err();
    assert!(matches!(err, TextError::UnknownLocale { .. }));
}

#[test]
fn global_mapping_and_default_locale() {
    textform::map_locale_to_variant("en_pirate", Arc::new(pirate()));

    let text = textform::create(vec!["cat", "parrot"], Some("en_pirate")).unwrap();
    assert_eq!(text.pluralize(2).unwrap().to_string(), "catz an' parrotz");

    textform::set_default_locale("EN_PIRATE");
    assert_eq!(global::default_locale(), "en_pirate");
    assert_eq!(textform::create("a", None).unwrap().locale(), "en_pirate");
    // Text::new always uses the base locale.
    assert_eq!(Text::new("a").unwrap().locale(), "en_us");

    textform::set_default_locale("en_us");
    assert_eq!(textform::create("a", None).unwrap().locale(), "en_us");
}

#[test]
fn global_hooks_apply_to_new_texts() {
    let hook: ComposeHook = Arc::new(|value: Value, domain: &str| {
        if domain == "global_hooks" && value.as_string() == Some("Hi %s") {
            Value::from("Ahoy %s")
        } else {
            value
        }
    });
    textform::register_compose_hook(HookTiming::Pre, hook);

    let text = Text::new("Hi %s").unwrap();
    assert_eq!(
        text.compose(Some("global_hooks"), &components!["matey"]).unwrap(),
        "Ahoy matey"
    );
    assert_eq!(text.compose(None, &components!["matey"]).unwrap(), "Hi matey");
}
