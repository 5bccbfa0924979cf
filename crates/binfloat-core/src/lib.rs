//! IEEE 754-2008 binary interchange format resolution.
//!
//! Maps a requested storage width in bits (optionally with explicit
//! exponent/mantissa bit counts) to the native floating-point kind that
//! implements exactly that bit layout on a given platform, or to a
//! precise error when no such kind exists:
//!
//! - [`FormatError::InvalidWidth`] — the standard defines no interchange
//!   format at that width.
//! - [`FormatError::Unimplemented`] — the width is valid per the
//!   standard's multiple-of-32 extension rule, but the derivation is
//!   deliberately not coded.
//! - [`FormatError::NotFound`] — the request is well-formed, but no
//!   native kind on the platform implements it.
//!
//! The candidate kinds are an explicit, injectable [`FloatTable`], so
//! resolution is testable against synthetic platforms rather than only
//! against the build host's `f32`/`f64`.

pub mod error;
pub mod format;
pub mod kind;
pub mod resolve;

pub use error::{FormatError, Result};
pub use format::{standard_exponent_bits, standard_mantissa_bits, BinaryFormat};
pub use kind::{FloatKind, FloatLimits, NativeFloat};
pub use resolve::FloatTable;
