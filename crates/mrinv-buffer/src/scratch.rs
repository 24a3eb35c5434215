//! Per-phase scratch space for temporary inversion buffers.
//!
//! [`ScratchRegion`] is a bump allocator over a `Vec` of one element
//! kind. A computation phase — assembling a kernel matrix, staging a
//! transform — takes what it needs, and the region is reset between
//! phases so the backing allocation is reused instead of churning the
//! heap. Everything the region hands out is zero-initialized and owned
//! by the region, released en masse when it drops.

use std::mem::size_of;

use mrinv_core::{Element, ElementKind};

/// Bump-allocated scratch space for temporary typed data.
///
/// Unlike [`TypedBuf`](crate::TypedBuf), slices handed out here borrow
/// the region: they cannot outlive it and all become invalid at
/// [`reset`](Self::reset). Use it for intermediates that live within
/// one phase; use `TypedBuf` for results that escape.
pub struct ScratchRegion<T: Element> {
    /// Backing storage. Grows on demand, never shrinks during a run.
    data: Vec<T>,
    /// Bump pointer: elements allocated since the last reset.
    cursor: usize,
}

impl<T: Element> ScratchRegion<T> {
    /// Create a scratch region with the given initial capacity (in elements).
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            data: vec![T::ZERO; initial_capacity],
            cursor: 0,
        }
    }

    /// Allocate `len` elements of scratch space.
    ///
    /// Returns a zero-initialized mutable slice. `None` only if the
    /// cursor arithmetic would overflow `usize`; growth of the backing
    /// `Vec` otherwise accommodates any request the system can satisfy.
    pub fn alloc(&mut self, len: usize) -> Option<&mut [T]> {
        let new_cursor = self.cursor.checked_add(len)?;
        if new_cursor > self.data.len() {
            // Grow to at least double, so repeated small requests
            // settle into an amortized-constant number of resizes.
            let target = new_cursor.max(self.data.len().saturating_mul(2)).max(64);
            self.data.resize(target, T::ZERO);
        }
        let start = self.cursor;
        self.cursor = new_cursor;
        let slice = &mut self.data[start..new_cursor];
        // Stale data from before the last reset must not leak through.
        slice.fill(T::ZERO);
        Some(slice)
    }

    /// Reset for the next phase.
    ///
    /// Does not deallocate or zero the backing storage; the next
    /// `alloc` overwrites stale contents with zeroes before returning.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// The element kind this region serves.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Elements currently allocated since the last reset.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity of the backing storage in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Memory footprint of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrinv_core::Complex128;

    #[test]
    fn alloc_returns_zeroed_slice() {
        let mut scratch = ScratchRegion::<Complex128>::new(256);
        let s = scratch.alloc(10).unwrap();
        assert_eq!(s.len(), 10);
        assert!(s.iter().all(|&v| v == Complex128::ZERO));
    }

    #[test]
    fn sequential_allocs_do_not_overlap() {
        let mut scratch = ScratchRegion::<f64>::new(256);
        let a = scratch.alloc(5).unwrap();
        a[0] = 1.0;
        let a_ptr = a.as_ptr();

        let b = scratch.alloc(3).unwrap();
        b[0] = 10.0;
        assert_ne!(a_ptr, b.as_ptr());
        assert_eq!(scratch.used(), 8);
    }

    #[test]
    fn reset_reuses_storage_and_rezeroes() {
        let mut scratch = ScratchRegion::<f32>::new(64);
        let s = scratch.alloc(32).unwrap();
        s.fill(7.0);
        scratch.reset();
        assert_eq!(scratch.used(), 0);

        let s = scratch.alloc(32).unwrap();
        assert!(s.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn grows_beyond_initial_capacity() {
        let mut scratch = ScratchRegion::<f32>::new(4);
        let s = scratch.alloc(100).unwrap();
        assert_eq!(s.len(), 100);
        assert!(scratch.capacity() >= 100);
    }

    #[test]
    fn zero_len_alloc_is_valid() {
        let mut scratch = ScratchRegion::<Complex128>::new(16);
        let s = scratch.alloc(0).unwrap();
        assert!(s.is_empty());
        assert_eq!(scratch.used(), 0);
    }

    #[test]
    fn memory_bytes_tracks_capacity_and_kind() {
        let scratch = ScratchRegion::<Complex128>::new(128);
        assert_eq!(scratch.memory_bytes(), 128 * 16);
        assert_eq!(scratch.kind(), ElementKind::Complex128);
    }
}
