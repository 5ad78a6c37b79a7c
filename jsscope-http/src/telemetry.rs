//! Process memory reporting.
//!
//! [`CountingAllocator`] wraps the system allocator and keeps a running total
//! of live heap bytes. Binaries opt in with
//!
//! ```rust,ignore
//! #[global_allocator]
//! static GLOBAL: jsscope_http::telemetry::CountingAllocator =
//!     jsscope_http::telemetry::CountingAllocator;
//! ```
//!
//! Without it the counter stays at zero.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicUsize, Ordering},
};

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            if new_size >= layout.size() {
                ALLOCATED.fetch_add(new_size - layout.size(), Ordering::Relaxed);
            } else {
                ALLOCATED.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

/// Live heap bytes seen by [`CountingAllocator`].
pub fn allocated_bytes() -> usize {
    ALLOCATED.load(Ordering::Relaxed)
}

/// Live heap size formatted as `"{:.2} MB"`.
pub fn memory_usage() -> String {
    format_megabytes(allocated_bytes())
}

fn format_megabytes(bytes: usize) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}
