//! Sequence comparer.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ptr;

use crate::compare::HashEq;
use crate::value::{HashValue, hash_one};
use crate::{Mix32, Mix64};

/// Comparer treating the entire input as an ordered sequence of elements.
///
/// Equality walks both sequences lazily and stops at the first point of
/// difference; two sequences of different lengths are never equal, and an
/// empty sequence equals only another empty sequence. Hashing feeds every
/// element, in order, into a fresh accumulator.
///
/// Elements are compared with their own equality and hashed through the
/// standard hasher; the `Hash + Eq` bounds carry the element types' own
/// hash/equality consistency up to whole sequences.
pub struct SequenceComparer<T> {
    marker: PhantomData<fn(&T)>,
}

impl<T> SequenceComparer<T> {
    /// Creates a sequence comparer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: Hash + Eq> SequenceComparer<T> {
    /// Element-wise equality over two lazily walked sequences.
    ///
    /// Consumes both iterators only up to the first mismatch or to the end
    /// of the shorter sequence plus one step.
    pub fn equals_iter<'v, I, J>(&self, x: I, y: J) -> bool
    where
        T: 'v,
        I: IntoIterator<Item = &'v T>,
        J: IntoIterator<Item = &'v T>,
    {
        let mut xs = x.into_iter();
        let mut ys = y.into_iter();
        loop {
            match (xs.next(), ys.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if a != b {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    /// Feeds every element, in order, into a fresh 32-bit accumulator.
    pub fn hash32_iter<'v, I>(&self, seq: I) -> u32
    where
        T: 'v,
        I: IntoIterator<Item = &'v T>,
    {
        let mut mix = Mix32::new();
        for item in seq {
            mix.add(HashValue::Hashed(hash_one(item)));
        }
        mix.finish()
    }

    /// Feeds every element, in order, into a fresh 64-bit accumulator.
    pub fn hash64_iter<'v, I>(&self, seq: I) -> u64
    where
        T: 'v,
        I: IntoIterator<Item = &'v T>,
    {
        let mut mix = Mix64::new();
        for item in seq {
            mix.add(HashValue::Hashed(hash_one(item)));
        }
        mix.finish()
    }
}

impl<T: Hash + Eq> HashEq<[T]> for SequenceComparer<T> {
    fn equals(&self, x: Option<&[T]>, y: Option<&[T]>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b) || self.equals_iter(a, b),
            _ => false,
        }
    }

    fn hash32(&self, value: Option<&[T]>) -> u32 {
        value.map_or(0, |seq| self.hash32_iter(seq))
    }

    fn hash64(&self, value: Option<&[T]>) -> u64 {
        value.map_or(0, |seq| self.hash64_iter(seq))
    }
}

impl<T> Default for SequenceComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SequenceComparer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SequenceComparer<T> {}

impl<T> fmt::Debug for SequenceComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceComparer").finish_non_exhaustive()
    }
}
