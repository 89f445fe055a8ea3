//! Errors returned by this crate.

/// `Error` enumerates over all possible errors that this crate shall return.
///
/// A key that is merely absent is not an error; lookups and removals report
/// absence through `Option` and `bool` returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Returned when a tree is constructed without a comparator.
    MissingComparator,
}
