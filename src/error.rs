//! Error types for sparse container operations.

use thiserror::Error;

/// Error variants for sparse vector operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is outside the vector, or the vector is empty.
    #[error("index out of bounds: {0}")]
    OutOfBounds(usize),

    /// A range lookup was performed for an index that lies in the void.
    #[error("no range covers index {0}")]
    NoSuchRange(usize),

    /// Two iterators over different containers were combined.
    #[error("iterators refer to different containers")]
    AlienIterator,

    /// A write was attempted through a proxy to a cell that is not materialized.
    #[error("write through void cell at index {0}")]
    VoidWrite(usize),
}

/// A specialized Result type for sparse vector operations.
pub type Result<T> = std::result::Result<T, Error>;
