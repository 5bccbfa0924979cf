//! Resolution of a requested format against a table of native kinds.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::format::{standard_exponent_bits, standard_mantissa_bits, BinaryFormat};
use crate::kind::{FloatKind, NativeFloat};

/// An ordered table of the native floating-point kinds a platform
/// offers, narrowest first by convention.
///
/// The order is the resolution priority: the first matching candidate
/// wins. Two kinds sharing an identical layout does not occur on any
/// mainstream platform, but the tie-break must still be deterministic,
/// so the table preserves exactly the order it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatTable {
    kinds: Vec<NativeFloat>,
}

impl FloatTable {
    /// Build a table from candidates in priority order.
    pub fn new(kinds: Vec<NativeFloat>) -> Self {
        Self { kinds }
    }

    /// The build host's own kinds: `f32` and `f64`, introspected.
    pub fn host() -> Self {
        Self::new(vec![
            NativeFloat::of::<f32>(FloatKind::Single),
            NativeFloat::of::<f64>(FloatKind::Double),
        ])
    }

    /// Candidates in priority order.
    pub fn kinds(&self) -> &[NativeFloat] {
        &self.kinds
    }

    /// Look up a candidate by its kind tag.
    pub fn kind(&self, kind: FloatKind) -> Option<&NativeFloat> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    /// Resolve a requested width to a native kind.
    ///
    /// Omitted exponent/mantissa widths are filled in from the
    /// standard-width rule, and its errors propagate unchanged. A
    /// supplied width is taken literally and bypasses the rule, so an
    /// explicit triple at a nonstandard storage width reaches the
    /// search and can only fail with [`FormatError::NotFound`].
    pub fn resolve(
        &self,
        storage_bits: u32,
        exponent_bits: Option<u32>,
        mantissa_bits: Option<u32>,
    ) -> Result<FloatKind> {
        let requested = BinaryFormat {
            storage_bits,
            exponent_bits: match exponent_bits {
                Some(bits) => bits,
                None => standard_exponent_bits(storage_bits)?,
            },
            mantissa_bits: match mantissa_bits {
                Some(bits) => bits,
                None => standard_mantissa_bits(storage_bits)?,
            },
        };
        self.resolve_format(&requested)
    }

    /// Resolve an explicit format descriptor: first candidate in table
    /// order that implements the layout exactly.
    pub fn resolve_format(&self, requested: &BinaryFormat) -> Result<FloatKind> {
        self.kinds
            .iter()
            .find(|k| k.matches(requested))
            .map(|k| k.kind)
            .ok_or(FormatError::NotFound {
                requested: *requested,
            })
    }
}
