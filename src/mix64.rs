//! 64-bit two-lane hash accumulator.
//!
//! Wider variant of [`mix32`](crate::mix32) with xxHash-style
//! rotate-multiply lane steps and a finalize that folds the ingestion count
//! into the mix. Intended where a materially lower collision probability is
//! worth the wider fingerprint: large sets, content fingerprints.

use crate::value::HashValue;

/// First lane seed (golden ratio at 2⁶⁴ scale).
const SEED_1: u64 = 0x9E37_79B9_7F4A_7C15;

/// Second lane seed (xxHash prime 2).
const SEED_2: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// xxHash prime 1.
const PRIME_1: u64 = 0x9E37_79B1_85EB_CA87;

/// xxHash prime 2.
const PRIME_2: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// xxHash prime 3.
const PRIME_3: u64 = 0x1656_67B1_9E37_79F9;

/// Incremental 64-bit fingerprint accumulator.
///
/// Same external shape and lifecycle as [`Mix32`](crate::Mix32), at double
/// the width. Not thread safe: one instance per call site.
#[derive(Debug, Clone, Copy)]
pub struct Mix64 {
    h1: u64,
    h2: u64,
    count: u64,
}

impl Mix64 {
    /// Creates an empty accumulator with seeded lanes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            h1: SEED_1,
            h2: SEED_2,
            count: 0,
        }
    }

    /// Ingests one value.
    ///
    /// Even ingestion counts mix into lane 1, odd counts into lane 2, each
    /// with a rotate-multiply step. The count always increments — a null
    /// value is a distinct contribution of `0`, not a no-op.
    pub fn add<'a>(&mut self, value: impl Into<HashValue<'a>>) {
        let code = value.into().code64();
        if self.count & 1 == 0 {
            self.h1 = self
                .h1
                .wrapping_add(code.wrapping_mul(PRIME_1))
                .rotate_left(31)
                .wrapping_mul(PRIME_2);
        } else {
            self.h2 = self
                .h2
                .wrapping_add(code.wrapping_mul(PRIME_2))
                .rotate_left(27)
                .wrapping_mul(PRIME_3);
        }
        self.count += 1;
    }

    /// Fluent [`add`](Self::add).
    #[must_use]
    pub fn with<'a>(mut self, value: impl Into<HashValue<'a>>) -> Self {
        self.add(value);
        self
    }

    /// Ingests every value of a sequence, in order.
    pub fn add_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = HashValue<'a>>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Returns the number of values ingested so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Finalizes into the fingerprint.
    ///
    /// Merges the lanes, folds in the ingestion count, then applies a
    /// strong avalanche. Idempotent; ingestion state is untouched.
    #[must_use]
    pub const fn finish(&self) -> u64 {
        let mut h = self.h1 ^ self.h2.wrapping_mul(PRIME_3);

        h ^= self.count.wrapping_mul(PRIME_1);
        h = h.wrapping_mul(PRIME_2);

        h ^= h >> 29;
        h = h.wrapping_mul(PRIME_3);
        h ^= h >> 32;

        h
    }
}

impl Default for Mix64 {
    fn default() -> Self {
        Self::new()
    }
}

/// Combines an arbitrary sequence of values into one fingerprint.
///
/// Strictly equivalent to `Mix64::new()`, [`Mix64::add`] per value in
/// order, [`Mix64::finish`].
#[must_use]
pub fn combine<'a, I>(values: I) -> u64
where
    I: IntoIterator<Item = HashValue<'a>>,
{
    let mut mix = Mix64::new();
    mix.add_all(values);
    mix.finish()
}

macro_rules! combine_fns {
    ($($(#[$doc:meta])* $name:ident($($v:ident),+);)+) => {$(
        $(#[$doc])*
        #[must_use]
        pub fn $name<'a>($($v: impl Into<HashValue<'a>>),+) -> u64 {
            let mut mix = Mix64::new();
            $(mix.add($v);)+
            mix.finish()
        }
    )+};
}

combine_fns! {
    /// Combines one value.
    ///
    /// Routes through the same accumulator path as every other arity; a
    /// one-element sequence is never short-circuited to the raw value code.
    combine1(v1);
    /// Combines two values, in order.
    combine2(v1, v2);
    /// Combines three values, in order.
    combine3(v1, v2, v3);
    /// Combines four values, in order.
    combine4(v1, v2, v3, v4);
    /// Combines five values, in order.
    combine5(v1, v2, v3, v4, v5);
    /// Combines six values, in order.
    combine6(v1, v2, v3, v4, v5, v6);
    /// Combines seven values, in order.
    combine7(v1, v2, v3, v4, v5, v6, v7);
    /// Combines eight values, in order.
    combine8(v1, v2, v3, v4, v5, v6, v7, v8);
}
