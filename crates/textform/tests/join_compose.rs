//! Tests for joining values, composing messages and quantity inflection.

use std::collections::BTreeMap;
use std::sync::Arc;

use icu_locale_core::langid;
use textform::{
    ComposeHook, HookTiming, LocaleRegistry, RuleSource, RuleTable, RuleVariant, Text, TextError,
    Value, components,
};

fn compose(message: &str, components: &[Value]) -> String {
    Text::new(message).unwrap().compose(None, components).unwrap()
}

// =========================================================================
// Join
// =========================================================================

#[test]
fn join_single_value() {
    let text = Text::new("a").unwrap().join(None, None);
    assert_eq!(text.values(), ["a"]);
}

#[test]
fn join_two_values() {
    let text = Text::new(vec!["a", "b"]).unwrap().join(None, None);
    assert_eq!(text.values(), ["a and b"]);
}

#[test]
fn join_three_values() {
    let text = Text::new(vec!["a", "b", "c"]).unwrap().join(None, None);
    assert_eq!(text.values(), ["a, b and c"]);
}

#[test]
fn join_custom_separators() {
    let text = Text::new(vec!["a", "b", "c"]).unwrap();
    assert_eq!(text.join(Some("; "), Some("or")).to_string(), "a; b or c");
}

#[test]
fn join_right_to_left() {
    let rules = RuleTable::builder()
        .plural_to_singular(RuleTable::compile_rules(&[RuleSource::new("(.)s$", "${1}")]).unwrap())
        .singular_to_plural(BTreeMap::from([(
            2,
            RuleTable::compile_rules(&[RuleSource::new("(.)$", "${1}s")]).unwrap(),
        )]))
        .build();
    let variant = RuleVariant::builder()
        .locale("xx_rtl")
        .language(langid!("en"))
        .rules(rules)
        .right_to_left(true)
        .build();
    let mut registry = LocaleRegistry::new();
    registry.map_locale_to_variant("xx_rtl", Arc::new(variant));

    let text = registry.create(vec!["a", "b", "c"], Some("xx_rtl")).unwrap();
    assert_eq!(text.to_string(), "c, b and a");
}

#[test]
fn display_joins_values() {
    let text = Text::new(vec!["red", "green", "blue"]).unwrap();
    assert_eq!(text.to_string(), "red, green and blue");
}

// =========================================================================
// Compose
// =========================================================================

#[test]
fn compose_interpolates_strings() {
    assert_eq!(compose("Hello %s", &components!["World"]), "Hello World");
}

#[test]
fn compose_without_placeholders() {
    assert_eq!(compose("Hello", &[]), "Hello");
    assert_eq!(compose("100%%", &[]), "100%");
}

#[test]
fn compose_positional_arguments() {
    assert_eq!(compose("%2$s %1$s", &components!["a", "b"]), "b a");
    assert_eq!(compose("%s %1$s %s", &components!["a", "b"]), "a a b");
}

#[test]
fn compose_integer_conversions() {
    assert_eq!(compose("%d", &components![42]), "42");
    assert_eq!(compose("%+d", &components![5]), "+5");
    assert_eq!(compose("%05d", &components![42]), "00042");
    assert_eq!(compose("%05d", &components![-42]), "-0042");
    assert_eq!(compose("%x %X", &components![255, 255]), "ff FF");
    assert_eq!(compose("%o %b", &components![8, 5]), "10 101");
    assert_eq!(compose("%c", &components![65]), "A");
}

#[test]
fn compose_float_conversions() {
    assert_eq!(compose("%.2f", &components![3.14159]), "3.14");
    assert_eq!(compose("%8.3f", &components![3.14159]), "   3.142");
    assert_eq!(compose("%f", &components![1.5]), "1.500000");
}

#[test]
fn compose_exponent_conversions() {
    assert_eq!(compose("%e", &components![12.3456]), "1.234560e+1");
    assert_eq!(compose("%.2E", &components![0.000123]), "1.23E-4");
    assert_eq!(compose("%.1e", &components![-2500]), "-2.5e+3");
}

#[test]
fn compose_general_conversions() {
    assert_eq!(compose("%g", &components![1234.5]), "1234.5");
    assert_eq!(compose("%g", &components![100]), "100");
    assert_eq!(compose("%g", &components![0.00001234]), "1.234e-5");
    assert_eq!(compose("%G", &components![1e10]), "1E+10");
}

#[test]
fn compose_rejects_oversized_fields() {
    let err = Text::new("%999999999999s")
        .unwrap()
        .compose(None, &components!["a"])
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot compose message: field size 999999999999 exceeds the maximum of 4096"
    );

    let err = Text::new("%.100000f")
        .unwrap()
        .compose(None, &components![1.5])
        .unwrap_err();
    assert!(matches!(err, TextError::Format { .. }));
}

#[test]
fn compose_string_padding() {
    assert_eq!(compose("%-5s|", &components!["ab"]), "ab   |");
    assert_eq!(compose("%5s|", &components!["ab"]), "   ab|");
    assert_eq!(compose("%'*8s", &components!["x"]), "*******x");
    assert_eq!(compose("%.3s", &components!["abcdef"]), "abc");
}

#[test]
fn compose_spreads_a_single_list_component() {
    let args = [Value::from(vec!["a", "b"])];
    assert_eq!(compose("%s-%s", &args), "a-b");
}

#[test]
fn compose_accepts_text_components() {
    let name = Text::new("user_name").unwrap().camelize(false).unwrap();
    assert_eq!(compose("field %s", &components![&name]), "field userName");
}

#[test]
fn compose_multi_value_text_joins() {
    let text = Text::new(vec!["a", "b"]).unwrap();
    assert_eq!(text.compose(None, &[]).unwrap(), "a and b");
}

#[test]
fn compose_too_few_arguments_fails() {
    let err = Text::new("%s %s")
        .unwrap()
        .compose(None, &components!["a"])
        .unwrap_err();
    assert!(matches!(err, TextError::Format { .. }));
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot compose message: too few arguments: placeholder 2 requested, 1 given"
    );
}

#[test]
fn compose_position_zero_fails() {
    let err = Text::new("%0$s")
        .unwrap()
        .compose(None, &components!["a"])
        .unwrap_err();
    assert!(err.to_string().contains("argument positions start at 1"));
}

#[test]
fn compose_malformed_message_fails() {
    let err = Text::new("50%").unwrap().compose(None, &[]).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"cannot compose message: syntax error at column 3: invalid conversion specification starting at '%'"
    );
}

// =========================================================================
// Compose hooks
// =========================================================================

fn translating_registry() -> LocaleRegistry {
    let registry = LocaleRegistry::new();
    let translate: ComposeHook = Arc::new(|value: Value, domain: &str| {
        let translated = match (domain, value.as_string()) {
            ("messages", Some("Hello %s")) => Some("Bonjour %s"),
            ("messages", Some("World")) => Some("Monde"),
            _ => None,
        };
        translated.map_or(value, Value::from)
    });
    registry.register_compose_hook(HookTiming::Pre, translate);
    registry
}

#[test]
fn identity_hooks_leave_messages_unchanged() {
    let registry = LocaleRegistry::new();
    let identity: ComposeHook = Arc::new(|value: Value, _domain: &str| value);
    registry.register_compose_hook(HookTiming::Pre, Arc::clone(&identity));
    registry.register_compose_hook(HookTiming::Post, identity);

    let text = registry.create("Hello %s", None).unwrap();
    assert_eq!(text.compose(None, &components!["World"]).unwrap(), "Hello World");
}

#[test]
fn pre_hook_translates_message_and_components() {
    let registry = translating_registry();
    let text = registry.create("Hello %s", None).unwrap();
    assert_eq!(text.compose(None, &components!["World"]).unwrap(), "Bonjour Monde");
}

#[test]
fn pre_hook_receives_domain() {
    let registry = translating_registry();
    let text = registry.create("Hello %s", None).unwrap();
    assert_eq!(
        text.compose(Some("admin"), &components!["World"]).unwrap(),
        "Hello World"
    );
}

#[test]
fn post_hook_runs_after_interpolation() {
    let registry = translating_registry();
    let text = registry.create("Hello %s", None).unwrap();

    let shout: ComposeHook =
        Arc::new(|value: Value, _domain: &str| Value::from(value.to_string().to_uppercase()));
    registry.register_compose_hook(HookTiming::Post, shout);

    assert_eq!(text.compose(None, &components!["World"]).unwrap(), "BONJOUR MONDE");

    registry.remove_compose_hook(HookTiming::Post);
    assert_eq!(text.compose(None, &components!["World"]).unwrap(), "Bonjour Monde");
}

// =========================================================================
// Quantity inflection
// =========================================================================

#[test]
fn inflect_on_quantity_single_value_uses_singular() {
    let text = Text::new("a.txt").unwrap();
    let label = text.inflect_on_quantity("file", Some("%d files"), true).unwrap();
    assert_eq!(label.to_string(), "file");
}

#[test]
fn inflect_on_quantity_spells_out_single_digits() {
    let text = Text::new(vec!["a", "b", "c"]).unwrap();
    let label = text.inflect_on_quantity("file", Some("%d files"), true).unwrap();
    assert_eq!(label.to_string(), "three files");
}

#[test]
fn inflect_on_quantity_uses_numerals() {
    let text = Text::new(vec!["a", "b", "c"]).unwrap();
    let label = text.inflect_on_quantity("file", Some("%d files"), false).unwrap();
    assert_eq!(label.to_string(), "3 files");

    let many: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
    let text = Text::new(many).unwrap();
    let label = text.inflect_on_quantity("file", Some("%d files"), true).unwrap();
    assert_eq!(label.to_string(), "12 files");
}

#[test]
fn inflect_on_quantity_pluralizes_without_plural_form() {
    let text = Text::new(vec!["a", "b"]).unwrap();
    let label = text.inflect_on_quantity("box", None, false).unwrap();
    assert_eq!(label.to_string(), "boxes");
}

#[test]
fn inflect_on_quantity_plural_without_count() {
    let text = Text::new(vec!["a", "b"]).unwrap();
    let label = text.inflect_on_quantity("file", Some("several files"), true).unwrap();
    assert_eq!(label.to_string(), "several files");
}
