//! Deterministic, order-sensitive multi-value hash mixing.
//!
//! Two-lane accumulators derive stable, well-distributed fingerprints for
//! composite and sequence values — typically as keys for hash-based
//! containers. A layered API sits on one canonical mixing function:
//!
//! - [`Mix32`] / [`Mix64`] — incremental accumulators (create → add\* → finish)
//! - [`mix32::combine`], [`mix32::combine1`] … [`mix32::combine8`] (and the
//!   [`mix64`] twins) — convenience combiners, bit-for-bit equal to the
//!   incremental path at every arity
//! - [`compare`] — equality/hash adapters that extract ordered component
//!   tuples from domain values and delegate hashing to a fresh accumulator
//!
//! # Key properties
//!
//! - **Determinism**: the same value sequence always yields the same
//!   fingerprint within one running process
//! - **Order sensitivity**: permuting the ingested sequence changes the
//!   result with overwhelming probability
//! - **Hash/equality consistency**: values an adapter considers equal hash
//!   identically, at both widths, nulls included
//! - **Totality**: the mixing core never fails — a null value contributes a
//!   deterministic `0` code, not a no-op
//!
//! Not cryptographic, not flood-resistant, and not stable across processes
//! or builds; fingerprints are in-process keys, not serialized identities.
//!
//! # Concurrency
//!
//! An accumulator is a small owned value and is not thread safe; callers
//! must not share a single instance across concurrent execution contexts —
//! create one per call site. Comparers are immutable after construction and
//! safe to share for independent `equals`/`hash` calls.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod error;
pub mod mix32;
pub mod mix64;
pub mod value;

#[cfg(test)]
mod tests;

pub use compare::{
    Accessor, CompositeKeyComparer, DictionaryKeyComparer, HashEq, KeySelector, SelectorComparer,
    SequenceComparer, Structural, StructuralComparer,
};
pub use error::Error;
pub use mix32::Mix32;
pub use mix64::Mix64;
pub use value::{HashValue, hash_one};
