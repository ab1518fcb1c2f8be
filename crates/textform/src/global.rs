//! The process-wide locale registry.
//!
//! [`Text::new`](crate::Text::new) and the free functions here share one
//! [`LocaleRegistry`], so locale mappings, compose hooks and the transform
//! cache are visible everywhere in the process.

use std::sync::{Arc, LazyLock, RwLock};

use crate::engine::{TextContext, TextError};
use crate::locale::{ComposeHook, HookTiming, LocaleRegistry, Variant};
use crate::types::{Text, Value};

static GLOBAL_REGISTRY: LazyLock<RwLock<LocaleRegistry>> =
    LazyLock::new(|| RwLock::new(LocaleRegistry::new()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&LocaleRegistry) -> T) -> T {
    let guard = GLOBAL_REGISTRY.read().expect("global registry lock poisoned");
    f(&guard)
}

/// Provides write access to the global registry.
pub fn with_registry_mut<T>(f: impl FnOnce(&mut LocaleRegistry) -> T) -> T {
    let mut guard = GLOBAL_REGISTRY.write().expect("global registry lock poisoned");
    f(&mut guard)
}

/// Create a text through the global registry.
pub fn create(value: impl Into<Value>, locale: Option<&str>) -> Result<Text, TextError> {
    with_registry(|registry| registry.create(value, locale))
}

/// Map `locale` to `variant` in the global registry.
pub fn map_locale_to_variant(locale: &str, variant: Arc<dyn Variant>) {
    with_registry_mut(|registry| registry.map_locale_to_variant(locale, variant));
}

/// Sets the default locale of the global registry.
pub fn set_default_locale(locale: &str) {
    with_registry_mut(|registry| registry.set_default_locale(locale));
}

/// Returns the default locale of the global registry.
pub fn default_locale() -> String {
    with_registry(|registry| registry.default_locale().to_owned())
}

/// Install a compose hook on the global registry.
pub fn register_compose_hook(timing: HookTiming, hook: ComposeHook) {
    with_registry(|registry| registry.register_compose_hook(timing, hook));
}

/// The context shared by every text of the global registry.
pub fn context() -> Arc<TextContext> {
    with_registry(|registry| Arc::clone(registry.context()))
}
