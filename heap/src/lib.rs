//! A fixed-footprint, segregated-fit memory pool allocator.
//!
//! A single contiguous byte region of compile-time size (`HEAP_SIZE`) is
//! partitioned at [`Heap::init`] time into up to `MAX_POOLS` pools, each
//! dedicated to serving requests up to a given block size. Allocation and
//! deallocation then service the caller from the appropriate pool in
//! constant time after a bounded linear pool scan, without ever growing the
//! backing region and without touching the platform allocator.
//!
//! # Usage
//!
//! ```
//! use segfit_heap::Heap;
//!
//! let mut heap: Heap = Heap::new();
//! assert!(heap.init(&[32, 64, 256, 1024]));
//!
//! let block = heap.allocate(100).expect("a pool must have capacity");
//! heap.release(Some(block));
//! ```
//!
//! For a process-wide singleton instead of an explicit value, see the
//! [`global`] module.
//!
//! # Design
//!
//! See the crate's `DESIGN.md` for the invariants this implementation
//! maintains and the rationale behind the offset-based (rather than
//! raw-pointer-based) pool descriptors.
//!
//! # Non-goals
//!
//! This allocator never splits or merges pools to serve a request larger
//! than the largest configured block size, never tracks per-allocation
//! metadata, never detects double-free beyond the pool-membership check that
//! [`Heap::release`] naturally performs, and never returns memory to the
//! host system — the backing region persists for the `Heap` value's
//! lifetime.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod heap;
mod pool;

#[cfg(feature = "std")]
pub mod global;

pub use crate::heap::Heap;
