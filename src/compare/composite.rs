//! Composite-key comparer.

use std::fmt;
use std::ptr;

use crate::compare::HashEq;
use crate::error::Error;
use crate::value::HashValue;
use crate::{mix32, mix64};

/// Boxed single-component selector used by [`CompositeKeyComparer`].
pub type KeySelector<T> = Box<dyn for<'a> Fn(&'a T) -> HashValue<'a> + Send + Sync>;

/// Comparer driven by an ordered list of selectors, one component each.
///
/// Components are compared (and fed to the accumulator) in selector order,
/// so the list order is part of the key's identity.
///
/// ```
/// use lanemix::{CompositeKeyComparer, HashEq, HashValue, KeySelector};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let selectors: Vec<KeySelector<Point>> = vec![
///     Box::new(|p| HashValue::from(p.x)),
///     Box::new(|p| HashValue::from(p.y)),
/// ];
/// let comparer = CompositeKeyComparer::new(selectors).unwrap();
/// assert!(comparer.equals(Some(&Point { x: 1, y: 2 }), Some(&Point { x: 1, y: 2 })));
/// ```
pub struct CompositeKeyComparer<T> {
    selectors: Vec<KeySelector<T>>,
}

impl<T> CompositeKeyComparer<T> {
    /// Creates a comparer from the given selectors, in component order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] if `selectors` is empty — a comparer with
    /// no components would consider everything equal.
    pub fn new(selectors: Vec<KeySelector<T>>) -> Result<Self, Error> {
        if selectors.is_empty() {
            return Err(Error::Missing {
                parameter: "selectors",
            });
        }
        Ok(Self { selectors })
    }

    /// Returns the number of key components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.selectors.len()
    }
}

impl<T> HashEq<T> for CompositeKeyComparer<T> {
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                ptr::eq(a, b) || self.selectors.iter().all(|sel| sel(a) == sel(b))
            }
            _ => false,
        }
    }

    fn hash32(&self, value: Option<&T>) -> u32 {
        value.map_or(0, |v| {
            mix32::combine(self.selectors.iter().map(|sel| sel(v)))
        })
    }

    fn hash64(&self, value: Option<&T>) -> u64 {
        value.map_or(0, |v| {
            mix64::combine(self.selectors.iter().map(|sel| sel(v)))
        })
    }
}

impl<T> fmt::Debug for CompositeKeyComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeKeyComparer")
            .field("components", &self.selectors.len())
            .finish_non_exhaustive()
    }
}
