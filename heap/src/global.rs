//! A process-wide, `Mutex`-guarded singleton wrapping one [`Heap`].
//!
//! This module is the sanctioned external collaborator for multi-threaded
//! use: the core [`Heap`] type performs no locking and assumes no
//! concurrent entry (see the crate's concurrency design notes), so any
//! synchronization lives here instead, not in the core. Available only with
//! the `std` feature (enabled by default).
//!
//! ```
//! use segfit_heap::global;
//!
//! assert!(global::init(&[32, 64, 256, 1024]));
//! let block = global::allocate(100).unwrap();
//! global::release(Some(block));
//! ```

use core::ptr::NonNull;
use std::sync::{Mutex, OnceLock};

use crate::Heap;

static HEAP: OnceLock<Mutex<Heap>> = OnceLock::new();

fn heap() -> &'static Mutex<Heap> {
    HEAP.get_or_init(|| Mutex::new(Heap::new()))
}

/// Synchronized equivalent of [`Heap::init`] against the process-wide
/// singleton.
pub fn init(sizes: &[usize]) -> bool {
    heap().lock().unwrap_or_else(|poisoned| poisoned.into_inner()).init(sizes)
}

/// Synchronized equivalent of [`Heap::allocate`] against the process-wide
/// singleton.
pub fn allocate(n: usize) -> Option<NonNull<u8>> {
    heap().lock().unwrap_or_else(|poisoned| poisoned.into_inner()).allocate(n)
}

/// Synchronized equivalent of [`Heap::release`] against the process-wide
/// singleton.
pub fn release(p: Option<NonNull<u8>>) {
    heap().lock().unwrap_or_else(|poisoned| poisoned.into_inner()).release(p)
}
