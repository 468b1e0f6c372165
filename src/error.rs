use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures shared by `Deque` and `RandomizedQueue`. Every failing
/// operation leaves its container exactly as it was.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An insertion was given an absent item.
    InvalidArgument,
    /// A removal or sample was requested from an empty container.
    EmptyCollection,
    /// Iterators are read-only and cannot remove items.
    UnsupportedOperation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("cannot insert an absent item"),
            Error::EmptyCollection => f.write_str("the collection is empty"),
            Error::UnsupportedOperation => f.write_str("iterators do not support removal"),
        }
    }
}

impl std::error::Error for Error {}
