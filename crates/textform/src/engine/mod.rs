//! The transformation engine.
//!
//! Splitting, case conversion and inflection operate on single tokens and
//! are driven by a variant's rule table. [`Text`](crate::Text) applies them
//! to every value through the [`TransformCache`], and joins or composes the
//! results.

mod cache;
pub mod case;
pub mod case_fold;
pub mod compose;
mod context;
mod error;
pub mod inflect;
pub mod split;

pub use cache::{Cached, Operation, TransformCache};
pub use context::TextContext;
pub use error::{Inflection, TextError, compute_suggestions};
