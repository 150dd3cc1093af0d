//! Structural comparer over a fixed per-type member schema.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use crate::compare::HashEq;
use crate::value::HashValue;
use crate::{mix32, mix64};

/// Member accessor: maps an instance to one component value.
pub type Accessor<T> = for<'a> fn(&'a T) -> HashValue<'a>;

/// Fixed per-type extraction schema.
///
/// `MEMBERS` is the ordered accessor list over a type's externally visible
/// members, registered once per type at compile time and shared by the
/// equality and hash paths. The [`structural!`](crate::structural) macro
/// generates the implementation from a member list.
pub trait Structural: Sized + 'static {
    /// Ordered member accessors. The order is fixed for the type.
    const MEMBERS: &'static [Accessor<Self>];
}

/// Registers a type's member schema for [`StructuralComparer`].
///
/// Each accessor is a non-capturing closure (or fn item) from `&Self` to
/// [`HashValue`](crate::HashValue); the listed order becomes the schema
/// order.
///
/// ```
/// use lanemix::{HashEq, HashValue, StructuralComparer};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// lanemix::structural!(Point => |p| HashValue::from(p.x), |p| HashValue::from(p.y));
///
/// let comparer = StructuralComparer::<Point>::new();
/// assert!(comparer.equals(Some(&Point { x: 1, y: 2 }), Some(&Point { x: 1, y: 2 })));
/// ```
#[macro_export]
macro_rules! structural {
    ($ty:ty => $($accessor:expr),+ $(,)?) => {
        impl $crate::compare::Structural for $ty {
            const MEMBERS: &'static [$crate::compare::Accessor<Self>] = &[$($accessor),+];
        }
    };
}

/// Comparer driven by the type's registered member schema.
///
/// Stateless: the schema lives in the [`Structural`] implementation, so the
/// comparer itself is a zero-sized handle.
pub struct StructuralComparer<T> {
    marker: PhantomData<fn(&T)>,
}

impl<T: Structural> StructuralComparer<T> {
    /// Creates a structural comparer for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: Structural> HashEq<T> for StructuralComparer<T> {
    fn equals(&self, x: Option<&T>, y: Option<&T>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                ptr::eq(a, b) || T::MEMBERS.iter().all(|member| member(a) == member(b))
            }
            _ => false,
        }
    }

    fn hash32(&self, value: Option<&T>) -> u32 {
        value.map_or(0, |v| {
            mix32::combine(T::MEMBERS.iter().map(|member| member(v)))
        })
    }

    fn hash64(&self, value: Option<&T>) -> u64 {
        value.map_or(0, |v| {
            mix64::combine(T::MEMBERS.iter().map(|member| member(v)))
        })
    }
}

impl<T: Structural> Default for StructuralComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StructuralComparer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructuralComparer<T> {}

impl<T> fmt::Debug for StructuralComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuralComparer").finish_non_exhaustive()
    }
}
