//! Allocation discipline of the recursion temporaries.
//!
//! Every recursion level allocates twelve half-size temporaries and must
//! release them before its frame returns. A counting global allocator makes
//! that observable: after a deep recursive multiply, the only bytes still
//! live are the returned product. This test owns the whole binary because a
//! `#[global_allocator]` is process-wide.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use strassen::{multiply, SquareMatrix};

struct CountingAllocator;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static FREED: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        FREED.fetch_add(layout.size(), Ordering::SeqCst);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    ALLOCATED.load(Ordering::SeqCst) as isize - FREED.load(Ordering::SeqCst) as isize
}

#[test]
fn test_temporaries_are_released_with_their_frames() {
    // Odd size, several recursion levels: 257 -> 129 -> 65 -> 33 -> 17 -> 9.
    let n = 257;
    let a = SquareMatrix::from_fn(n, |i, _| i as f64);
    let b = SquareMatrix::from_fn(n, |_, j| j as f64);

    let before = live_bytes();

    let c = multiply(&a, &b).unwrap();

    // Everything the recursion allocated is gone; only the product remains.
    let product_bytes = (n * n * std::mem::size_of::<f64>()) as isize;
    assert_eq!(live_bytes() - before, product_bytes);

    drop(c);
    assert_eq!(live_bytes(), before);
}
