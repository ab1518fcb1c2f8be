//! Locale to variant mapping and text construction.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::engine::{TextContext, TextError, compute_suggestions};
use crate::locale::{BASE_LOCALE, ComposeHook, EnglishVariant, HookTiming, Variant};
use crate::types::{Text, Value, VariantId};

/// Maps locale names to variants and creates texts for them.
///
/// The base locale `en_us` is always available and served by
/// [`EnglishVariant`]. Texts created by one registry share its
/// [`TextContext`], so they share the transform cache and see compose hooks
/// registered at any time.
///
/// # Example
///
/// ```
/// use textform::LocaleRegistry;
///
/// let registry = LocaleRegistry::new();
/// let text = registry.create("box", None).unwrap();
///
/// assert_eq!(text.locale(), "en_us");
/// assert_eq!(text.pluralize(3).unwrap().to_string(), "boxes");
/// assert!(registry.create("box", Some("xx_yy")).is_err());
/// ```
pub struct LocaleRegistry {
    variants: BTreeMap<String, Arc<dyn Variant>>,
    default_locale: String,
    base: Arc<dyn Variant>,
    context: Arc<TextContext>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self {
            variants: BTreeMap::new(),
            default_locale: BASE_LOCALE.to_string(),
            base: Arc::new(EnglishVariant),
            context: Arc::new(TextContext::new()),
        }
    }
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Locale Mapping
    // =========================================================================

    /// Map `locale` to `variant`, replacing any previous mapping.
    ///
    /// The locale name is lowercased. The variant is validated when a text is
    /// created for it, not here. Texts created for `locale` cache their
    /// transforms under `locale`, whatever name the variant reports, and
    /// replacing a mapping drops the entries cached for the old variant.
    pub fn map_locale_to_variant(&mut self, locale: &str, variant: Arc<dyn Variant>) {
        let locale = locale.to_lowercase();
        if locale == BASE_LOCALE {
            tracing::warn!(%locale, "base locale is always served by the English variant");
        }
        tracing::debug!(%locale, variant = variant.locale(), "mapping locale to variant");
        if self.variants.insert(locale.clone(), variant).is_some() {
            self.context
                .cache()
                .evict_variant(VariantId::from_locale(&locale));
        }
    }

    /// Locale used by [`create`](Self::create) when none is given.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn set_default_locale(&mut self, locale: &str) {
        self.default_locale = locale.to_lowercase();
        tracing::debug!(locale = %self.default_locale, "setting default locale");
    }

    /// All locales texts can be created for, including the base locale.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.variants.keys().cloned().collect();
        if !self.variants.contains_key(BASE_LOCALE) {
            locales.push(BASE_LOCALE.to_string());
            locales.sort();
        }
        locales
    }

    // =========================================================================
    // Compose Hooks
    // =========================================================================

    /// Install `hook` for `timing`, replacing any previous hook.
    pub fn register_compose_hook(&self, timing: HookTiming, hook: ComposeHook) {
        tracing::debug!(%timing, "registering compose hook");
        self.context.set_hook(timing, hook);
    }

    pub fn remove_compose_hook(&self, timing: HookTiming) {
        self.context.remove_hook(timing);
    }

    pub fn context(&self) -> &Arc<TextContext> {
        &self.context
    }

    // =========================================================================
    // Text Construction
    // =========================================================================

    /// Create a text for `locale`, or for the default locale if `None`.
    ///
    /// Fails with [`TextError::UnknownLocale`] if nothing is mapped to the
    /// locale and [`TextError::InvalidVariant`] if the mapped variant fails
    /// validation.
    pub fn create(&self, value: impl Into<Value>, locale: Option<&str>) -> Result<Text, TextError> {
        let locale = locale.map_or_else(|| self.default_locale.clone(), str::to_lowercase);
        if locale == BASE_LOCALE {
            return self.create_base(value);
        }

        let Some(variant) = self.variants.get(&locale) else {
            let suggestions = compute_suggestions(&locale, &self.locales());
            tracing::debug!(%locale, ?suggestions, "no variant mapped to locale");
            return Err(TextError::UnknownLocale {
                locale,
                suggestions,
            });
        };
        variant
            .validate()
            .map_err(|reason| TextError::InvalidVariant {
                locale: locale.clone(),
                reason,
            })?;
        let id = VariantId::from_locale(&locale);
        Text::resolved(value, Arc::clone(variant), id, Arc::clone(&self.context))
    }

    /// Create a text for the base locale.
    pub fn create_base(&self, value: impl Into<Value>) -> Result<Text, TextError> {
        let id = VariantId::from_locale(BASE_LOCALE);
        Text::resolved(value, Arc::clone(&self.base), id, Arc::clone(&self.context))
    }
}

impl Debug for LocaleRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LocaleRegistry")
            .field("locales", &self.variants.keys().collect::<Vec<_>>())
            .field("default_locale", &self.default_locale)
            .field("context", &self.context)
            .finish()
    }
}
