//! Owning typed buffers and the per-kind allocation entry points.
//!
//! A [`TypedBuf`] owns `len` contiguous elements of one [`ElementKind`].
//! Memory from [`TypedBuf::uninit`] is deliberately left uninitialized;
//! the kernel and transform routines that consume these buffers
//! overwrite them in full before reading, and zeroing megabyte-scale
//! staging arrays twice is measurable. Callers that want defined
//! contents up front use [`TypedBuf::zeroed`].

#![allow(unsafe_code)]

use std::fmt;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use mrinv_core::{Complex128, Complex64, Element, ElementKind};

use crate::error::AllocError;
use crate::raw;

/// An owning handle to `len` contiguous elements of `T`.
///
/// The handle exclusively owns its allocation from the moment it is
/// returned and releases it on drop. Alignment is the platform
/// allocator's guarantee for `T`'s layout; no stronger alignment is
/// promised.
///
/// # Initialization
///
/// [`uninit`](Self::uninit) leaves every element indeterminate. The safe
/// views are [`as_uninit_slice`](Self::as_uninit_slice) and
/// [`as_uninit_slice_mut`](Self::as_uninit_slice_mut); a `&[T]` view
/// requires either the safe [`fill`](Self::fill) path or an
/// [`assume_init`](Self::assume_init) call whose contract the caller
/// upholds. [`zeroed`](Self::zeroed) initializes every element to
/// [`Element::ZERO`], so `assume_init` is immediately permitted on it.
pub struct TypedBuf<T: Element> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Element> TypedBuf<T> {
    /// Allocate `len` elements, contents indeterminate.
    ///
    /// `len == 0` succeeds with an empty buffer backed by no heap
    /// allocation. Failure — exhaustion or a byte size overflowing
    /// `usize` — is returned as an [`AllocError`]; this never panics.
    pub fn uninit(len: usize) -> Result<Self, AllocError> {
        match raw::alloc_array::<T>(len) {
            Some(ptr) => Ok(Self { ptr, len }),
            None => Err(AllocError::for_request::<T>(len)),
        }
    }

    /// Allocate `len` elements, every element set to [`Element::ZERO`].
    ///
    /// Same contract as [`uninit`](Self::uninit) otherwise.
    pub fn zeroed(len: usize) -> Result<Self, AllocError> {
        match raw::alloc_array_zeroed::<T>(len) {
            Some(ptr) => Ok(Self { ptr, len }),
            None => Err(AllocError::for_request::<T>(len)),
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length buffer.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element kind this buffer's bytes are interpreted as.
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// Total size of the allocation in bytes.
    pub fn size_bytes(&self) -> usize {
        self.len * T::KIND.size_bytes()
    }

    /// Raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Raw mutable pointer to the first element.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// View the buffer as possibly-uninitialized elements.
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: `ptr` is valid for reads of `len` elements (dangling
        // only when `len == 0`, which is a valid empty slice), and
        // `MaybeUninit<T>` has `T`'s layout and no validity requirement.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast::<MaybeUninit<T>>(), self.len) }
    }

    /// Mutably view the buffer as possibly-uninitialized elements.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: as in `as_uninit_slice`, plus `&mut self` guarantees
        // exclusive access to the owned allocation.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast::<MaybeUninit<T>>(), self.len) }
    }

    /// Initialize every element to `value` and return the initialized view.
    ///
    /// The safe way to go from an [`uninit`](Self::uninit) buffer to
    /// `&mut [T]` when a uniform starting value is acceptable.
    pub fn fill(&mut self, value: T) -> &mut [T] {
        for slot in self.as_uninit_slice_mut() {
            slot.write(value);
        }
        // SAFETY: every element was written just above.
        unsafe { self.assume_init_mut() }
    }

    /// View the buffer as initialized elements.
    ///
    /// # Safety
    ///
    /// Every element must have been initialized: the buffer came from
    /// [`zeroed`](Self::zeroed), was filled via
    /// [`fill`](Self::fill), or had all `len` elements written through
    /// the uninit view or raw pointer.
    pub unsafe fn assume_init(&self) -> &[T] {
        // SAFETY: `ptr`/`len` describe this buffer's allocation; the
        // caller guarantees initialization.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutably view the buffer as initialized elements.
    ///
    /// # Safety
    ///
    /// As for [`assume_init`](Self::assume_init).
    pub unsafe fn assume_init_mut(&mut self) -> &mut [T] {
        // SAFETY: as in `assume_init`, with exclusivity from `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for TypedBuf<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr` was returned by the raw module for this `T` and
        // `len`, and ownership is unique, so this releases exactly once.
        unsafe { raw::dealloc_array(self.ptr, self.len) };
    }
}

// SAFETY: the buffer uniquely owns its allocation and Element requires
// Send + Sync of the element type.
unsafe impl<T: Element> Send for TypedBuf<T> {}
// SAFETY: shared access only exposes `&[MaybeUninit<T>]` reads.
unsafe impl<T: Element> Sync for TypedBuf<T> {}

impl<T: Element> fmt::Debug for TypedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedBuf(kind={}, len={})", T::KIND, self.len)
    }
}

/// Allocate an uninitialized buffer of 32-bit reals.
pub fn alloc_float32(count: usize) -> Result<TypedBuf<f32>, AllocError> {
    TypedBuf::uninit(count)
}

/// Allocate an uninitialized buffer of 64-bit reals.
pub fn alloc_float64(count: usize) -> Result<TypedBuf<f64>, AllocError> {
    TypedBuf::uninit(count)
}

/// Allocate an uninitialized buffer of single-precision complex values.
pub fn alloc_complex64(count: usize) -> Result<TypedBuf<Complex64>, AllocError> {
    TypedBuf::uninit(count)
}

/// Allocate an uninitialized buffer of double-precision complex values.
pub fn alloc_complex128(count: usize) -> Result<TypedBuf<Complex128>, AllocError> {
    TypedBuf::uninit(count)
}
