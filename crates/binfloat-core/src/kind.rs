//! Native floating-point kinds and their layout descriptors.
//!
//! A [`NativeFloat`] records what a platform's floating-point kind
//! actually looks like in memory: its storage width, its
//! exponent/mantissa split, and whether its encoding is IEC 559
//! (IEEE 754) conformant. For the build host's own `f32`/`f64` the
//! descriptor is computed from the type's numeric limits; for other
//! platforms it is supplied as data (see `binfloat-targets`).

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::format::BinaryFormat;

/// Tag for a conventional native floating-point kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloatKind {
    /// Half precision (binary16).
    Half,
    /// Single precision (binary32); `f32` / C `float`.
    Single,
    /// Double precision (binary64); `f64` / C `double`.
    Double,
    /// Extended precision (x87 80-bit and friends); C `long double`
    /// where it is not binary128.
    Extended,
    /// Quadruple precision (binary128).
    Quad,
}

impl fmt::Display for FloatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FloatKind::Half => "half",
            FloatKind::Single => "single",
            FloatKind::Double => "double",
            FloatKind::Extended => "extended",
            FloatKind::Quad => "quad",
        };
        write!(f, "{name}")
    }
}

/// Smallest bit count whose value range covers `x`.
fn bit_width(x: u32) -> u32 {
    u32::BITS - x.leading_zeros()
}

/// Numeric limits of a host floating-point type, for introspecting its
/// in-memory layout. Mirrors what `f32`/`f64` expose as associated
/// constants.
pub trait FloatLimits: Sized {
    /// One greater than the maximum normalized binary exponent.
    const MAX_EXP: i32;
    /// One greater than the minimum normalized binary exponent.
    const MIN_EXP: i32;
    /// Significand precision in bits, counting the implicit leading bit.
    const MANTISSA_DIGITS: u32;
    /// Exponent radix.
    const RADIX: u32;
    /// Whether the encoding is IEC 559 conformant.
    const IEC559: bool;
}

impl FloatLimits for f32 {
    const MAX_EXP: i32 = f32::MAX_EXP;
    const MIN_EXP: i32 = f32::MIN_EXP;
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const RADIX: u32 = f32::RADIX;
    // Rust guarantees IEEE 754 binary32 semantics for f32.
    const IEC559: bool = true;
}

impl FloatLimits for f64 {
    const MAX_EXP: i32 = f64::MAX_EXP;
    const MIN_EXP: i32 = f64::MIN_EXP;
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const RADIX: u32 = f64::RADIX;
    const IEC559: bool = true;
}

/// Layout descriptor for one native floating-point kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NativeFloat {
    /// Which conventional kind this is.
    pub kind: FloatKind,
    /// In-memory storage width in bits (including any padding, e.g.
    /// x87 extended stored in 128 bits).
    pub storage_bits: u32,
    /// Exponent field width in bits.
    pub exponent_bits: u32,
    /// Explicitly stored mantissa width in bits.
    pub mantissa_bits: u32,
    /// Exponent radix; only 2 can match an interchange format.
    pub radix: u32,
    /// Whether the platform certifies the encoding as IEC 559
    /// (IEEE 754) conformant. Extended formats that merely resemble
    /// IEEE 754 report `false`.
    pub iec559: bool,
}

impl NativeFloat {
    /// Introspect a host floating-point type.
    ///
    /// The exponent width is the bit count of the exponent *range*
    /// (`MAX_EXP - MIN_EXP`), computed with integer arithmetic; the
    /// stored mantissa drops the implicit leading significand bit.
    pub fn of<T: FloatLimits>(kind: FloatKind) -> Self {
        Self {
            kind,
            storage_bits: (mem::size_of::<T>() * 8) as u32,
            exponent_bits: bit_width((T::MAX_EXP - T::MIN_EXP) as u32),
            mantissa_bits: T::MANTISSA_DIGITS - 1,
            radix: T::RADIX,
            iec559: T::IEC559,
        }
    }

    /// The layout this kind occupies, as a format descriptor.
    pub fn layout(&self) -> BinaryFormat {
        BinaryFormat::new(self.storage_bits, self.exponent_bits, self.mantissa_bits)
    }

    /// Whether this kind implements exactly the requested interchange
    /// format: equal on all three bit fields, radix 2, and IEC 559
    /// conformant. No partial matches, no coercion.
    pub fn matches(&self, requested: &BinaryFormat) -> bool {
        self.radix == 2
            && self.iec559
            && self.storage_bits == requested.storage_bits
            && self.exponent_bits == requested.exponent_bits
            && self.mantissa_bits == requested.mantissa_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_width_boundaries() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(253), 8);
        assert_eq!(bit_width(255), 8);
        assert_eq!(bit_width(256), 9);
        assert_eq!(bit_width(2045), 11);
    }

    #[test]
    fn introspect_f32() {
        let single = NativeFloat::of::<f32>(FloatKind::Single);
        assert_eq!(single.storage_bits, 32);
        assert_eq!(single.exponent_bits, 8);
        assert_eq!(single.mantissa_bits, 23);
        assert_eq!(single.radix, 2);
        assert!(single.iec559);
        assert!(single.layout().is_well_formed());
    }

    #[test]
    fn introspect_f64() {
        let double = NativeFloat::of::<f64>(FloatKind::Double);
        assert_eq!(double.storage_bits, 64);
        assert_eq!(double.exponent_bits, 11);
        assert_eq!(double.mantissa_bits, 52);
        assert_eq!(double.radix, 2);
        assert!(double.iec559);
    }

    #[test]
    fn introspected_kinds_match_their_standard_format() {
        let single = NativeFloat::of::<f32>(FloatKind::Single);
        assert!(single.matches(&BinaryFormat::standard(32).unwrap()));
        assert!(!single.matches(&BinaryFormat::standard(64).unwrap()));

        let double = NativeFloat::of::<f64>(FloatKind::Double);
        assert!(double.matches(&BinaryFormat::standard(64).unwrap()));
        assert!(!double.matches(&BinaryFormat::standard(32).unwrap()));
    }

    #[test]
    fn nonconformant_kind_never_matches() {
        // x87 extended: right bit fields for nothing standard, and not
        // IEC 559 certified even for its own layout.
        let x87 = NativeFloat {
            kind: FloatKind::Extended,
            storage_bits: 128,
            exponent_bits: 15,
            mantissa_bits: 63,
            radix: 2,
            iec559: false,
        };
        assert!(!x87.matches(&BinaryFormat::standard(128).unwrap()));
        assert!(!x87.matches(&x87.layout()));
    }

    #[test]
    fn nonbinary_radix_never_matches() {
        let decimal = NativeFloat {
            kind: FloatKind::Double,
            storage_bits: 64,
            exponent_bits: 11,
            mantissa_bits: 52,
            radix: 10,
            iec559: true,
        };
        assert!(!decimal.matches(&BinaryFormat::standard(64).unwrap()));
    }
}
