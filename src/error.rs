//! Configuration errors raised when building comparers.

use thiserror::Error;

/// Error raised when a comparer is constructed with invalid configuration.
///
/// The hashing core itself is total — it never fails for any input,
/// including nulls, empty sequences and mixed element types. Only adapter
/// construction can reject its inputs, and it does so before any hashing
/// occurs; errors propagate synchronously and are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required configuration value was missing or empty.
    #[error("`{parameter}` requires at least one extraction function")]
    Missing {
        /// Name of the offending configuration parameter.
        parameter: &'static str,
    },
}
