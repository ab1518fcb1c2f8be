//! Compose hooks: the integration point for message catalogs.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;

use crate::engine::TextError;
use crate::types::Value;

/// A hook applied to a message (and its components) during `compose`.
///
/// Receives the value and the message domain and returns the replacement
/// value, typically a translation.
pub type ComposeHook = Arc<dyn Fn(Value, &str) -> Value + Send + Sync>;

/// When a compose hook runs relative to interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTiming {
    /// Before interpolation, on the raw message and each component.
    Pre,
    /// After interpolation, on the final message.
    Post,
}

impl FromStr for HookTiming {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" => Ok(HookTiming::Pre),
            "post" => Ok(HookTiming::Post),
            _ => Err(TextError::InvalidHookTiming {
                timing: s.to_string(),
            }),
        }
    }
}

impl Display for HookTiming {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            HookTiming::Pre => f.write_str("pre"),
            HookTiming::Post => f.write_str("post"),
        }
    }
}

/// The active compose hooks, at most one per timing.
#[derive(Clone, Default)]
pub struct ComposeHooks {
    pre: Option<ComposeHook>,
    post: Option<ComposeHook>,
}

impl ComposeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `hook` for `timing`, replacing any previous one.
    pub fn set(&mut self, timing: HookTiming, hook: ComposeHook) {
        match timing {
            HookTiming::Pre => self.pre = Some(hook),
            HookTiming::Post => self.post = Some(hook),
        }
    }

    pub fn remove(&mut self, timing: HookTiming) {
        match timing {
            HookTiming::Pre => self.pre = None,
            HookTiming::Post => self.post = None,
        }
    }

    pub fn get(&self, timing: HookTiming) -> Option<ComposeHook> {
        match timing {
            HookTiming::Pre => self.pre.clone(),
            HookTiming::Post => self.post.clone(),
        }
    }
}

impl Debug for ComposeHooks {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ComposeHooks")
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .finish()
    }
}
