//! Errors raised by this crate.

use thiserror::Error;

/// Errors raised when accessing an [EnumSet][crate::EnumSet].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A member reported an ordinal at or beyond the capacity of the set.
    ///
    /// Only reachable through a hand-written [Member][crate::Member]
    /// implementation which breaks the trait contract; implementations
    /// produced by [members!][crate::members!] cannot raise this.
    #[error("member ordinal {index} out of range, capacity is {capacity}")]
    OrdinalOutOfRange {
        /// The offending ordinal.
        index: usize,
        /// The capacity of the set.
        capacity: usize,
    },
}
