pub mod engine;
pub mod global;
pub mod locale;
pub mod parser;
pub mod rules;
pub mod types;

pub use engine::{
    Cached, Inflection, Operation, TextContext, TextError, TransformCache, compute_suggestions,
};
pub use global::{create, map_locale_to_variant, register_compose_hook, set_default_locale};
pub use locale::{
    BASE_LOCALE, ComposeHook, ComposeHooks, DEFAULT_DOMAIN, EnglishVariant, HookTiming,
    LocaleRegistry, RuleVariant, Variant,
};
pub use rules::{BoundaryPatterns, Rule, RuleSource, RuleTable};
pub use types::{Text, Value, VariantId};

/// Creates a `Vec<Value>` of compose components.
///
/// Each argument is converted via `Into<Value>`, so integers, floats,
/// strings and texts can be mixed.
///
/// # Example
///
/// ```
/// use textform::{Text, components};
///
/// let message = Text::new("%s has %d items").unwrap();
/// assert_eq!(
///     message.compose(None, &components!["cart", 3]).unwrap(),
///     "cart has 3 items"
/// );
/// ```
#[macro_export]
macro_rules! components {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![$(::std::convert::Into::<$crate::Value>::into($value)),+]
    };
}
