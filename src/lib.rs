//! In-place algorithms over caller-owned slices.
//!
//! Every algorithm mutates the slice it is given and never allocates beyond
//! a per-swap stack temporary. Each one comes in two flavors, following the
//! `sort` / `sort_by` convention: the plain name compares elements by the raw
//! bytes of their in-memory representation (see [`compare_bytes`]), the `_by`
//! name takes a caller comparator `FnMut(&T, &T) -> Ordering` for element
//! types with real ordering semantics.
//!
//! The algorithms:
//!
//! * [`unique`] / [`unique_by`] collapse adjacent runs of equal elements in a
//!   sorted slice and report the distinct prefix length.
//! * [`heapify`] / [`heapify_by`] arrange the slice as an implicit binary
//!   tree with the children of index `i` at `2i` and `2i + 1`.
//! * [`shuffle`] permutes the slice uniformly using a caller-provided
//!   [`rand::Rng`].
//! * [`reverse`] reverses in place.
//! * [`max`], [`min`] and [`clamp`] (and their `_by` twins) select between
//!   references without copying.
//! * [`swap`] and [`swap_nonoverlapping`] exchange values through raw
//!   pointers.
//!
//! The [`patterns`] module generates seeded test and benchmark inputs.

mod cmp;
mod heap;
mod reverse;
mod shuffle;
mod swap;
mod unique;

pub mod patterns;

pub use cmp::{clamp, clamp_by, compare_bytes, max, max_by, min, min_by};
pub use heap::{heapify, heapify_by};
pub use reverse::reverse;
pub use shuffle::shuffle;
pub use swap::{swap, swap_nonoverlapping};
pub use unique::{unique, unique_by};
