//! Low-level allocation primitives for typed buffers.
//!
//! The only module that talks to the platform allocator directly. Kept
//! to a handful of small functions so every `unsafe` operation sits next
//! to its `// SAFETY:` comment and its zero-size handling.

#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use mrinv_core::Element;

/// Allocate an uninitialized array of `count` elements of `T`.
///
/// Returns `None` if the byte size overflows or the allocator refuses
/// the request. A zero-size request succeeds with a dangling, aligned
/// pointer that must never be dereferenced (and needs no deallocation).
pub(crate) fn alloc_array<T: Element>(count: usize) -> Option<NonNull<T>> {
    if count == 0 {
        return Some(NonNull::dangling());
    }
    let layout = Layout::array::<T>(count).ok()?;
    // SAFETY: `layout` has non-zero size: `count > 0` and every Element
    // type is at least 4 bytes.
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast::<T>())
}

/// Allocate a zero-filled array of `count` elements of `T`.
///
/// Same contract as [`alloc_array`], with every byte set to zero. The
/// all-zero bit pattern is a valid value for all four element types.
pub(crate) fn alloc_array_zeroed<T: Element>(count: usize) -> Option<NonNull<T>> {
    if count == 0 {
        return Some(NonNull::dangling());
    }
    let layout = Layout::array::<T>(count).ok()?;
    // SAFETY: `layout` has non-zero size, as in `alloc_array`.
    let ptr = unsafe { alloc::alloc_zeroed(layout) };
    NonNull::new(ptr.cast::<T>())
}

/// Release an array previously returned by [`alloc_array`] or
/// [`alloc_array_zeroed`].
///
/// # Safety
///
/// `ptr` must have been returned by one of this module's allocation
/// functions called with the same `T` and the same `count`, and must
/// not have been released already.
pub(crate) unsafe fn dealloc_array<T: Element>(ptr: NonNull<T>, count: usize) {
    if count == 0 {
        // Zero-size handles are dangling and were never allocated.
        return;
    }
    let Ok(layout) = Layout::array::<T>(count) else {
        // Unreachable for a pointer that satisfies the contract: the
        // identical layout computation succeeded at allocation time.
        return;
    };
    // SAFETY: per this function's contract, `ptr` came from the global
    // allocator with exactly this layout and is released at most once.
    unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrinv_core::Complex64;

    #[test]
    fn zero_count_yields_dangling_without_allocating() {
        let ptr = alloc_array::<f32>(0).unwrap();
        assert_eq!(ptr, NonNull::dangling());
        // Releasing a zero-size handle is a no-op.
        unsafe { dealloc_array(ptr, 0) };
    }

    #[test]
    fn overflowing_byte_size_is_rejected() {
        assert!(alloc_array::<Complex64>(usize::MAX).is_none());
        assert!(alloc_array_zeroed::<f64>(usize::MAX / 4).is_none());
    }

    #[test]
    fn round_trip_small_allocation() {
        let ptr = alloc_array_zeroed::<f64>(16).unwrap();
        // SAFETY: 16 f64 slots were just allocated zeroed at `ptr`.
        let first = unsafe { ptr.as_ptr().read() };
        assert_eq!(first, 0.0);
        // SAFETY: allocated above with the same type and count.
        unsafe { dealloc_array(ptr, 16) };
    }
}
