//! Process-lifetime memoization of token transforms.
//!
//! Entries are keyed by operation, variant and input token. Rule tables are
//! fixed when a variant is built, so entries are only dropped when a locale
//! is remapped to another variant. Concurrent writers racing on the same key
//! store the same result.

use dashmap::DashMap;

use crate::types::VariantId;

/// The transform an entry was produced by.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Operation {
    Camelize { upper: bool },
    Underscorize,
    Dashize,
    Humanize,
    /// Pluralization under the rule tier with this threshold.
    Pluralize { tier: usize },
    Singularize,
}

/// A memoized transform result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached {
    Transformed(String),
    /// No rule applied to the input.
    NoRule,
}

impl Cached {
    fn from_output(output: Option<String>) -> Self {
        output.map_or(Cached::NoRule, Cached::Transformed)
    }

    fn into_output(self) -> Option<String> {
        match self {
            Cached::Transformed(output) => Some(output),
            Cached::NoRule => None,
        }
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    operation: Operation,
    variant: VariantId,
    input: String,
}

/// Concurrent transform cache.
#[derive(Debug, Default)]
pub struct TransformCache {
    entries: DashMap<CacheKey, Cached>,
}

impl TransformCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, operation: Operation, variant: VariantId, input: &str) -> Option<Cached> {
        let key = CacheKey {
            operation,
            variant,
            input: input.to_string(),
        };
        self.entries.get(&key).map(|entry| entry.value().clone())
    }

    pub fn insert(
        &self,
        operation: Operation,
        variant: VariantId,
        input: &str,
        output: Cached,
    ) {
        tracing::trace!(?operation, %variant, input, ?output, "caching transform result");
        let key = CacheKey {
            operation,
            variant,
            input: input.to_string(),
        };
        self.entries.insert(key, output);
    }

    /// Returns the cached result or computes, stores and returns it.
    pub fn get_or_insert_with<E>(
        &self,
        operation: Operation,
        variant: VariantId,
        input: &str,
        compute: impl FnOnce() -> Result<Option<String>, E>,
    ) -> Result<Option<String>, E> {
        if let Some(hit) = self.get(operation, variant, input) {
            return Ok(hit.into_output());
        }
        let output = compute()?;
        self.insert(operation, variant, input, Cached::from_output(output.clone()));
        Ok(output)
    }

    /// Drop every entry cached for `variant`.
    pub fn evict_variant(&self, variant: VariantId) {
        tracing::debug!(%variant, "evicting cached transforms");
        self.entries.retain(|key, _| key.variant != variant);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
