//! # Sparse Sequence Container
//!
//! *A dense-looking vector that only pays for its non-zero runs.*
//!
//! ## Intuition First
//!
//! Picture a strip-chart recorder that ran for a day but only captured a
//! few bursts of signal. Storing every sample wastes almost all of the
//! paper on flat baseline. What you actually want to keep is each burst
//! together with the time it started; the baseline in between can be
//! reproduced on demand, because it is always the same value: zero.
//!
//! A [`SparseVector`] is exactly that strip of paper. It behaves like a
//! vector of length `N`, but internally it is a sorted list of *ranges*,
//! each a starting offset plus a dense buffer of values. Everything
//! between ranges is "the void" and reads back as zero.
//!
//! ## The Problem
//!
//! Plain storage forces a trade-off on mostly-empty sequences:
//! - **Dense vector**: $O(1)$ access but $O(N)$ space, even when almost
//!   every cell is zero.
//! - **Index map**: space proportional to the data, but per-element key
//!   overhead and scattered allocations, even when the data arrives in
//!   long contiguous runs.
//!
//! Run-sparse storage keeps one contiguous buffer per run: space is
//! $O(\text{data})$, point access is a binary search over the run list
//! ($O(\log r)$ for $r$ runs), and scanning a run is as cache-friendly as
//! scanning a plain vector.
//!
//! ## The Hard Part
//!
//! The interface is the easy half. The value of the container is the
//! canonical form it maintains through every mutation: ranges are always
//! sorted, never empty, never overlapping, and never touching (at least
//! one void cell separates any two). Inserting data that bridges a gap
//! must fuse ranges; voiding the middle of a range must split it; mixing
//! new data into existing cells must distinguish stored values from the
//! void it materializes. All of those paths funnel into one forward
//! coalescing pass, so no other code needs to know how fusion works.
//!
//! ## What Could Go Wrong
//!
//! 1. **Assigning into the void**: a void cell has no storage, so point
//!    access hands out a proxy instead of a reference. Writing through a
//!    void proxy is reported, not silently absorbed; materializing a cell
//!    takes [`SparseVector::set`].
//! 2. **Zero is structural, not numeric**: writing the value zero into a
//!    materialized cell does *not* return it to the void. Only
//!    [`SparseVector::unset`] and the voiding operations do.
//! 3. **Iterator invalidation**: any mutation may reallocate, merge or
//!    erase range buffers; Rust's borrow rules turn what would be dangling
//!    iterators into compile errors.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`SparseVector`]**: the container itself.
//! - **[`DataRange`]** and **[`Span`]**: one materialized run and its
//!   purely positional half.
//! - **[`Iter`]/[`IterMut`]**: full-sequence iteration, zeros synthesized
//!   in the void.
//! - **[`Ranges`]/[`RangesMut`]**: iteration over materialized runs only.
//! - **[`CellRef`]/[`CellMut`]**: proxies for cells that may not exist.
//!
//! With the `serde` feature enabled, the container serializes as
//! `(len, [(offset, values)...])` and re-validates its invariants on load.
//!
//! ## References
//!
//! - Golomb, S. W. (1966). "Run-length encodings."
//! - Knuth, D. E. TAOCP vol. 1, §2.2.6 — sparse array representations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod data_range;
pub mod error;
pub mod iter;
#[cfg(feature = "serde")]
mod serde_support;
pub mod span;
pub mod sparse_vec;

pub use cell::{CellMut, CellRef};
pub use data_range::DataRange;
pub use error::{Error, Result};
pub use iter::{Iter, IterMut, RangeDataMut, Ranges, RangesMut};
pub use span::Span;
pub use sparse_vec::SparseVector;
