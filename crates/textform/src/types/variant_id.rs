use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, serializable identifier for a locale variant.
///
/// `VariantId` wraps a 64-bit FNV-1a hash of the lowercased locale name. It
/// keys the transform cache, so two texts created for the same locale share
/// memoized results.
///
/// # Example
///
/// ```
/// use textform::VariantId;
///
/// const EN_US: VariantId = VariantId::from_locale("en_us");
///
/// assert_eq!(EN_US, VariantId::from_locale("en_us"));
/// assert_ne!(EN_US, VariantId::from_locale("fr_fr"));
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct VariantId(u64);

impl VariantId {
    /// Create a VariantId from an already-normalized locale name.
    pub const fn from_locale(locale: &str) -> Self {
        Self(fnv1a_hash_str_64(locale))
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "VariantId({:016x})", self.0)
    }
}
