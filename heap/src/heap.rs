//! The segregated-fit allocator value type.

use core::ptr::NonNull;

use crate::pool::{Pool, LINK_WIDTH};

/// A fixed-footprint, segregated-fit block memory allocator.
///
/// `Heap` owns both the backing region (`HEAP_SIZE` bytes, embedded inline)
/// and the descriptor table (up to `MAX_POOLS` pools). Because the region is
/// embedded rather than referenced through a stable external address, a
/// `Heap` value must not be moved while it holds live allocations: every
/// pointer returned by [`allocate`](Heap::allocate) is only valid as long as
/// the `Heap` it came from stays at the same address (e.g. behind a `Box`, a
/// `'static` singleton — see [`crate::global`] — or simply never moved after
/// its first `allocate`).
///
/// All three operations take `&mut self`: the core performs no locking and
/// assumes no concurrent entry, per the allocator's single-threaded
/// contract. Wrap a `Heap` in a `Mutex` (see [`crate::global`]) for
/// multi-thread use.
pub struct Heap<const HEAP_SIZE: usize = 65536, const MAX_POOLS: usize = 5> {
    region: [u8; HEAP_SIZE],
    pools: [Pool; MAX_POOLS],
    pool_count: usize,
}

impl<const HEAP_SIZE: usize, const MAX_POOLS: usize> Heap<HEAP_SIZE, MAX_POOLS> {
    /// Creates an unconfigured heap. Call [`init`](Heap::init) before
    /// allocating; `allocate`/`release` are safe, well-defined no-ops until
    /// then.
    pub const fn new() -> Self {
        Self { region: [0; HEAP_SIZE], pools: [Pool::EMPTY; MAX_POOLS], pool_count: 0 }
    }

    /// Partitions the backing region into `sizes.len()` pools of the given
    /// block sizes, in the order given. Discards any prior configuration,
    /// live or freed blocks included.
    ///
    /// Returns `false`, leaving no pool configured, if:
    /// * `sizes` is empty or longer than `MAX_POOLS`;
    /// * any size is zero or smaller than one link word
    ///   (`size_of::<usize>()`);
    /// * any size exceeds `HEAP_SIZE / sizes.len()`, the equal partition
    ///   every pool is allotted.
    pub fn init(&mut self, sizes: &[usize]) -> bool {
        self.pool_count = 0;
        let count = sizes.len();
        if count == 0 || count > MAX_POOLS {
            return false;
        }
        let partition = HEAP_SIZE / count;
        for &size in sizes {
            if size < LINK_WIDTH || size > partition {
                return false;
            }
        }
        for pool in &mut self.pools {
            *pool = Pool::EMPTY;
        }
        for (i, &size) in sizes.iter().enumerate() {
            self.pools[i] = Pool {
                block_size: size,
                start: i * partition,
                max: partition / size,
                allocated: 0,
                free_head: None,
            };
        }
        self.pool_count = count;
        true
    }

    /// Returns an address of at least `n` contiguous bytes from the
    /// smallest configured pool that both fits `n` and has capacity,
    /// breaking ties by lowest descriptor index. Returns `None` if no pool
    /// qualifies (including when [`init`](Heap::init) has never succeeded).
    ///
    /// The returned bytes hold whatever contents they last held; `Heap`
    /// never zeroes memory.
    pub fn allocate(&mut self, n: usize) -> Option<NonNull<u8>> {
        let idx = self.best_fit(n)?;
        let region = self.region.as_mut_ptr();
        let offset = unsafe { self.pools[idx].alloc(region) }?;
        NonNull::new(unsafe { region.add(offset) })
    }

    /// Returns the block at `p` to its owning pool's free list. `p = None`
    /// and pointers that do not belong to any configured pool are silent
    /// no-ops; `release` never corrupts a pool and never panics on a foreign
    /// pointer.
    pub fn release(&mut self, p: Option<NonNull<u8>>) {
        let Some(p) = p else { return };
        if self.pool_count == 0 {
            return;
        }
        let region = self.region.as_mut_ptr();
        let region_start = region as usize;
        let addr = p.as_ptr() as usize;
        if addr < region_start || addr - region_start >= HEAP_SIZE {
            return;
        }
        let offset = addr - region_start;
        for pool in &mut self.pools[..self.pool_count] {
            if pool.owns(offset) {
                unsafe { pool.dealloc(region, offset) };
                return;
            }
        }
    }

    /// Best-fit-with-fallback pool selection (see module docs for the
    /// policy): the smallest configured, capacity-having pool whose block
    /// size is at least `n`, ties broken by lowest index.
    fn best_fit(&self, n: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, pool) in self.pools[..self.pool_count].iter().enumerate() {
            if !pool.fits(n) || !pool.has_capacity() {
                continue;
            }
            match best {
                Some(b) if self.pools[b].block_size <= pool.block_size => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<const HEAP_SIZE: usize, const MAX_POOLS: usize> Default for Heap<HEAP_SIZE, MAX_POOLS> {
    fn default() -> Self {
        Self::new()
    }
}
