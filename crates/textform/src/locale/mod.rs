//! Locale variants, the locale registry and compose hooks.

mod english;
mod hooks;
mod registry;
mod rule_variant;
mod variant;

pub use english::{BASE_LOCALE, EnglishVariant};
pub use hooks::{ComposeHook, ComposeHooks, HookTiming};
pub use registry::LocaleRegistry;
pub use rule_variant::RuleVariant;
pub use variant::{DEFAULT_DOMAIN, Variant};
