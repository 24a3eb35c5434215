//! Element kinds, complex value types, and the [`Element`] trait.

use std::fmt;

/// Classification of the numeric type a buffer's elements are interpreted as.
///
/// Inversion pipelines move between real and complex data of both
/// precisions: measured signals arrive as `Float32`/`Float64` series,
/// frequency-domain staging and kernel matrices use the complex kinds.
/// The set is closed — every buffer in the workspace holds exactly one
/// of these four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit IEEE-754 real value (`f32`).
    Float32,
    /// 64-bit IEEE-754 real value (`f64`).
    Float64,
    /// Single-precision complex value: two `f32` components, 8 bytes.
    Complex64,
    /// Double-precision complex value: two `f64` components, 16 bytes.
    Complex128,
}

impl ElementKind {
    /// Size in bytes of one element of this kind.
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::Float64 | Self::Complex64 => 8,
            Self::Complex128 => 16,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
        };
        write!(f, "{name}")
    }
}

/// Single-precision complex number: real and imaginary `f32` parts.
///
/// `#[repr(C)]` with the real part first, matching the interleaved
/// re/im layout the transform and kernel routines exchange with
/// external numeric libraries.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex64 {
    /// Real component.
    pub re: f32,
    /// Imaginary component.
    pub im: f32,
}

impl Complex64 {
    /// The additive identity (0 + 0i).
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Construct from real and imaginary parts.
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// Double-precision complex number: real and imaginary `f64` parts.
///
/// Layout as [`Complex64`], at double precision.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex128 {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl Complex128 {
    /// The additive identity (0 + 0i).
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Construct from real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex64 {}
    impl Sealed for super::Complex128 {}
}

/// A Rust type usable as a buffer element.
///
/// Sealed: implemented for exactly `f32`, `f64`, [`Complex64`], and
/// [`Complex128`]. Allocation code is generic over this trait, so the
/// four per-kind entry points share a single implementation.
pub trait Element: sealed::Sealed + Copy + Send + Sync + 'static {
    /// The kind tag corresponding to this type.
    const KIND: ElementKind;
    /// The all-zero value, used by zero-initialising allocation paths.
    const ZERO: Self;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float32;
    const ZERO: Self = 0.0;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;
    const ZERO: Self = 0.0;
}

impl Element for Complex64 {
    const KIND: ElementKind = ElementKind::Complex64;
    const ZERO: Self = Complex64::ZERO;
}

impl Element for Complex128 {
    const KIND: ElementKind = ElementKind::Complex128;
    const ZERO: Self = Complex128::ZERO;
}
