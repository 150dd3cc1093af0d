//! 32-bit two-lane hash accumulator.
//!
//! Values are ingested into two alternating lanes (rotate-left then XOR),
//! then merged non-commutatively and avalanched into one fingerprint. The
//! alternating lanes plus the non-commutative merge make the result
//! order-sensitive.

use crate::value::HashValue;

/// First lane seed (FNV offset basis).
const SEED_1: u32 = 0x811C_9DC5;

/// Second lane seed (golden ratio at 2³² scale).
const SEED_2: u32 = 0x9E37_79B9;

/// First merge prime (Murmur3 c1).
const MERGE_1: u32 = 0x85EB_CA6B;

/// Second merge prime (Murmur3 c2).
const MERGE_2: u32 = 0xC2B2_AE35;

/// Final avalanche multiplier.
const AVALANCHE: u32 = 0xC2B2_AE35;

/// Incremental 32-bit fingerprint accumulator.
///
/// Lifecycle: [`new`](Self::new) → [`add`](Self::add)\* →
/// [`finish`](Self::finish). `finish` does not consume ingestion state and
/// always returns the same value for the same state.
///
/// Not thread safe: create one accumulator per call site and exhaust it
/// there; never share an instance across concurrent execution contexts.
#[derive(Debug, Clone, Copy)]
pub struct Mix32 {
    h1: u32,
    h2: u32,
    count: u64,
}

impl Mix32 {
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
    /// Lane selection alternates by parity of the ingestion count: even
    /// counts mix into lane 1 (rotate-left 5, XOR), odd counts into lane 2
    /// (rotate-left 17, XOR). The count always increments — a null value is
    /// a distinct contribution of `0`, not a no-op.
    pub fn add<'a>(&mut self, value: impl Into<HashValue<'a>>) {
        let code = value.into().code32();
        if self.count & 1 == 0 {
            self.h1 = self.h1.rotate_left(5) ^ code;
        } else {
            self.h2 = self.h2.rotate_left(17) ^ code;
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
    /// Merges the lanes non-commutatively, then applies an avalanche
    /// transform. Idempotent: ingestion state is untouched, so calling
    /// `finish` repeatedly — or adding more values afterwards — is valid.
    #[must_use]
    pub const fn finish(&self) -> u32 {
        let mut h1 = self.h1;
        let h2 = self.h2;

        h1 = h1.wrapping_mul(MERGE_1).wrapping_add(h2);
        h1 ^= h2.wrapping_mul(MERGE_2);

        h1 ^= h1 >> 13;
        h1 = h1.wrapping_mul(AVALANCHE);
        h1 ^= h1 >> 16;

        h1
    }
}

impl Default for Mix32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Combines an arbitrary sequence of values into one fingerprint.
///
/// Strictly equivalent to `Mix32::new()`, [`Mix32::add`] per value in
/// order, [`Mix32::finish`].
#[must_use]
pub fn combine<'a, I>(values: I) -> u32
where
    I: IntoIterator<Item = HashValue<'a>>,
{
    let mut mix = Mix32::new();
    mix.add_all(values);
    mix.finish()
}

macro_rules! combine_fns {
    ($($(#[$doc:meta])* $name:ident($($v:ident),+);)+) => {$(
        $(#[$doc])*
        #[must_use]
        pub fn $name<'a>($($v: impl Into<HashValue<'a>>),+) -> u32 {
            let mut mix = Mix32::new();
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
