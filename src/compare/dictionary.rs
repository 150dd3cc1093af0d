//! Dictionary-key comparer.

use std::fmt;

use crate::compare::{HashEq, SelectorComparer};
use crate::value::HashValue;

/// Comparer for deriving map/set keys from a subset of an instance's
/// fields.
///
/// The extraction contract is identical to [`SelectorComparer`]; the
/// distinct type records intent at the use site — the selected components
/// ARE the key, and instances agreeing on them are interchangeable as
/// dictionary entries.
pub struct DictionaryKeyComparer<T, F> {
    inner: SelectorComparer<T, F>,
}

impl<T, F> DictionaryKeyComparer<T, F>
where
    F: for<'a> Fn(&'a T) -> Vec<HashValue<'a>>,
{
    /// Creates a comparer from the given key-extraction function.
    pub const fn new(key_selector: F) -> Self {
        Self {
            inner: SelectorComparer::new(key_selector),
        }
    }
}

impl<T, F> HashEq<T> for DictionaryKeyComparer<T, F>
where
    F: for<'a> Fn(&'a T) -> Vec<HashValue<'a>>,
{
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
        self.inner.equals(x, y)
    }

    fn hash32(&self, value: Option<&T>) -> u32 {
        self.inner.hash32(value)
    }

    fn hash64(&self, value: Option<&T>) -> u64 {
        self.inner.hash64(value)
    }
}

impl<T, F> fmt::Debug for DictionaryKeyComparer<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryKeyComparer").finish_non_exhaustive()
    }
}
