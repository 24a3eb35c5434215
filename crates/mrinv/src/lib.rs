//! mrinv: typed numeric buffers for signal and data inversion pipelines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the mrinv sub-crates. For most users, adding `mrinv` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mrinv::prelude::*;
//!
//! // Stage a 1024-point double-precision signal.
//! let mut signal = alloc_float64(1024).unwrap();
//! let samples = signal.fill(0.0);
//! samples[0] = 1.0;
//! assert_eq!(signal.size_bytes(), 8192);
//!
//! // Zero-length buffers are valid for every kind.
//! let empty = alloc_complex64(0).unwrap();
//! assert!(empty.is_empty());
//!
//! // Frequency-domain staging at double precision, zero-initialized.
//! let spectrum = TypedBuf::<Complex128>::zeroed(512).unwrap();
//! assert_eq!(spectrum.kind(), ElementKind::Complex128);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mrinv-core` | Element kinds, complex value types, the `Element` trait |
//! | [`buffer`] | `mrinv-buffer` | `TypedBuf`, the four `alloc_*` entry points, `ScratchRegion`, `AllocError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element kinds and numeric value types (`mrinv-core`).
pub use mrinv_core as types;

/// Typed buffer allocation and scratch regions (`mrinv-buffer`).
pub use mrinv_buffer as buffer;

/// Common imports for typical mrinv usage.
///
/// ```rust
/// use mrinv::prelude::*;
/// ```
pub mod prelude {
    // Element model
    pub use mrinv_core::{Complex128, Complex64, Element, ElementKind};

    // Buffers and entry points
    pub use mrinv_buffer::{
        alloc_complex128, alloc_complex64, alloc_float32, alloc_float64, AllocError,
        ScratchRegion, TypedBuf,
    };
}
