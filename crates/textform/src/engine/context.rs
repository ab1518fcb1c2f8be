//! State shared by every text created through one registry.

use std::sync::RwLock;

use crate::engine::TransformCache;
use crate::locale::{ComposeHook, ComposeHooks, HookTiming};

/// Transform cache and compose hooks shared by a registry and its texts.
///
/// Texts hold this behind an `Arc`, so hooks registered after a text was
/// created still apply when it is composed.
#[derive(Debug, Default)]
pub struct TextContext {
    cache: TransformCache,
    hooks: RwLock<ComposeHooks>,
}

impl TextContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &TransformCache {
        &self.cache
    }

    /// The hook currently registered for `timing`.
    pub fn hook(&self, timing: HookTiming) -> Option<ComposeHook> {
        self.hooks
            .read()
            .expect("compose hooks lock poisoned")
            .get(timing)
    }

    pub fn set_hook(&self, timing: HookTiming, hook: ComposeHook) {
        self.hooks
            .write()
            .expect("compose hooks lock poisoned")
            .set(timing, hook);
    }

    pub fn remove_hook(&self, timing: HookTiming) {
        self.hooks
            .write()
            .expect("compose hooks lock poisoned")
            .remove(timing);
    }
}
