//! End-to-end scenario walkthroughs (black-box, public API only).

use core::ptr::NonNull;
use segfit_heap::Heap;

/// Returns the address of byte 0 of `heap`'s backing region by allocating
/// once from a pool that is still entirely at its high-water mark; the
/// first block of an untouched pool is always the region's base address
/// plus that pool's own start offset.
fn region_base<const HEAP_SIZE: usize, const MAX_POOLS: usize>(
    heap: &mut Heap<HEAP_SIZE, MAX_POOLS>,
) -> usize {
    let probe = heap.allocate(1).expect("a freshly-initialized heap must have capacity");
    let base = probe.as_ptr() as usize;
    heap.release(Some(probe));
    base
}

#[test]
fn s1_rejected_configs() {
    let mut heap: Heap = Heap::new();
    assert!(!heap.init(&[32, 64, 256, 1024, 2048, 4096]));
    assert!(!heap.init(&[32, 64, 256, 1024, 14000]));
    assert!(heap.init(&[32, 64, 256, 1024]));
}

#[test]
fn s2_overflow_into_larger_pool() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));

    let partition = 65536 / 4;
    let pool_1024_start = 3 * partition;
    let pool_1024_end = pool_1024_start + 16 * 1024;

    // Reserve the base offset via the smallest pool without disturbing the
    // 256-byte pool under test.
    let base = region_base(&mut heap);

    let mut last = None;
    for _ in 0..65 {
        last = heap.allocate(240);
    }
    let last = last.expect("the 65th request must fall back to the 1024-byte pool");
    let offset = last.as_ptr() as usize - base;
    assert!((pool_1024_start..pool_1024_end).contains(&offset));
}

#[test]
fn s3_reject_null_release() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    heap.release(None);
    // A null release must not disturb subsequent allocation behavior.
    assert!(heap.allocate(32).is_some());
}

#[test]
fn s4_lifo_reuse() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    let p1 = heap.allocate(56).unwrap();
    let _p2 = heap.allocate(56).unwrap();
    heap.release(Some(p1));
    let p3 = heap.allocate(56).unwrap();
    assert_eq!(p3, p1);
}

#[test]
fn s5_refill_after_single_free() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    let mut q = None;
    for _ in 0..12 {
        q = heap.allocate(63);
    }
    heap.release(q);

    let mut succeeded = 0;
    let mut failed = 0;
    for _ in 0..18 {
        match heap.allocate(1023) {
            Some(_) => succeeded += 1,
            None => failed += 1,
        }
    }
    assert_eq!(succeeded, 16);
    assert_eq!(failed, 2);
}

#[test]
fn s6_foreign_pointer_is_noop() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));

    // Exhaust the 32-byte pool's high-water mark, free one block, then
    // attempt to release a foreign pointer: the free list must be unaffected.
    let p = heap.allocate(32).unwrap();
    heap.release(Some(p));

    let mut scratch = [0_u8; 8];
    let foreign = NonNull::new(scratch.as_mut_ptr()).unwrap();
    heap.release(Some(foreign));

    // The only free 32-byte block must still be `p`; the next allocation must
    // reuse it rather than bump the high-water mark or silently vanish.
    let reused = heap.allocate(32).unwrap();
    assert_eq!(reused, p);
}

#[test]
fn b1_zero_size_request_fails() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    assert!(heap.allocate(0).is_none());
}

#[test]
fn b2_largest_block_size_succeeds_with_capacity() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    assert!(heap.allocate(1024).is_some());
}

#[test]
fn b3_over_largest_block_size_always_fails() {
    let mut heap: Heap = Heap::new();
    assert!(heap.init(&[32, 64, 256, 1024]));
    assert!(heap.allocate(1025).is_none());
    let _ = heap.allocate(32);
    assert!(heap.allocate(1025).is_none());
}

#[test]
fn b4_fallback_chain_through_multiple_pools() {
    let mut heap: Heap<1024, 3> = Heap::new();
    // partition = 1024/3 = 341 bytes per pool.
    // 16-byte pool: 21 blocks, 64-byte pool: 5 blocks, 341-byte pool: 1 block.
    assert!(heap.init(&[16, 64, 341]));
    let base = region_base(&mut heap);
    let partition = 1024 / 3;
    let pool_64_start = base + partition;
    let pool_64_end = pool_64_start + 5 * 64;

    for _ in 0..21 {
        assert!(heap.allocate(16).is_some());
    }
    // The 16-byte pool is now exhausted; a 16-byte request falls back to the
    // next pool whose block size is still >= 16 and has capacity.
    let fallback = heap.allocate(16).unwrap().as_ptr() as usize;
    assert!((pool_64_start..pool_64_end).contains(&fallback));

    for _ in 0..4 {
        assert!(heap.allocate(16).is_some());
    }
    // The 64-byte pool is now exhausted too; fall back once more to the
    // single 341-byte block.
    let second_fallback = heap.allocate(16).unwrap().as_ptr() as usize;
    assert!(second_fallback >= pool_64_end);
    assert!(heap.allocate(16).is_none());
}
