//! Allocation error type.

use std::error::Error;
use std::fmt;

use mrinv_core::{Element, ElementKind};

/// A typed buffer could not be allocated.
///
/// Covers both heap exhaustion and a request whose byte size
/// (`count × element size`) overflows `usize`. Carries the failed
/// request so callers can report it without re-deriving context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of elements requested.
    pub count: usize,
    /// Element kind requested.
    pub kind: ElementKind,
}

impl AllocError {
    pub(crate) fn for_request<T: Element>(count: usize) -> Self {
        Self {
            count,
            kind: T::KIND,
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { count, kind } = self;
        match count.checked_mul(kind.size_bytes()) {
            Some(bytes) => {
                write!(f, "failed to allocate {count} {kind} elements ({bytes} bytes)")
            }
            None => write!(
                f,
                "failed to allocate {count} {kind} elements (byte size overflows usize)"
            ),
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;
    use mrinv_core::Complex128;

    #[test]
    fn display_includes_request_details() {
        let err = AllocError::for_request::<f64>(1024);
        assert_eq!(
            err.to_string(),
            "failed to allocate 1024 float64 elements (8192 bytes)"
        );
    }

    #[test]
    fn display_reports_overflowing_requests() {
        let err = AllocError::for_request::<Complex128>(usize::MAX);
        assert!(err.to_string().contains("overflows usize"));
    }
}
