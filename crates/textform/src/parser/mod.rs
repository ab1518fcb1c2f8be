//! Parser for printf-style message formats.
//!
//! `compose` interpolates components into a message through this parser's
//! AST rather than by scanning the message at render time.

pub mod ast;
pub mod error;
mod format;

pub use ast::*;
pub use error::ParseError;
pub use format::parse_format;
