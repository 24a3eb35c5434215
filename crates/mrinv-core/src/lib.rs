//! Core types for the mrinv workspace.
//!
//! This is the leaf crate with zero dependencies. It defines the element
//! model shared by the rest of the workspace: the closed set of numeric
//! element kinds an inversion buffer can hold, the complex value types,
//! and the [`Element`] trait binding Rust types to kinds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod element;

pub use element::{Complex128, Complex64, Element, ElementKind};
