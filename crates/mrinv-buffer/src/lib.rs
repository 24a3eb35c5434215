//! Typed numeric buffer allocation for mrinv inversion pipelines.
//!
//! Higher-level routines — kernel assembly, transforms, I/O staging —
//! need contiguous arrays of one of four element kinds: real or complex
//! values at single or double precision. This crate provides exactly
//! that: given an element count, allocate a correctly-sized block and
//! hand back an owning, typed handle.
//!
//! # Design
//!
//! - [`TypedBuf`] is the owning handle. Memory from [`TypedBuf::uninit`]
//!   is deliberately uninitialized (the common case is a buffer that is
//!   immediately overwritten in full); the safe view is
//!   `&mut [MaybeUninit<T>]`. [`TypedBuf::zeroed`] is the zeroing
//!   variant.
//! - Allocation failure — heap exhaustion or a byte size that overflows
//!   `usize` — is returned as an [`AllocError`] value. Nothing panics,
//!   aborts, or retries.
//! - The buffer releases its memory on drop, on every exit path.
//! - [`ScratchRegion`] is a per-phase bump region for temporaries,
//!   reset en masse between phases.
//!
//! This crate is the one in the workspace that may contain `unsafe`
//! code. It is confined to the private `raw` module and the buffer's
//! view/drop paths, each with a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod error;
mod raw;
pub mod scratch;

pub use buffer::{alloc_complex128, alloc_complex64, alloc_float32, alloc_float64, TypedBuf};
pub use error::AllocError;
pub use scratch::ScratchRegion;
