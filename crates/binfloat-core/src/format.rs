//! Binary interchange format descriptors and the standard-width rule.
//!
//! IEEE 754-2008 §3.6 fixes the exponent/mantissa split for the
//! interchange widths 16, 32, 64, and 128; wider formats exist in the
//! standard (any multiple of 32) but their split comes from a
//! `round(4 * log2(w)) - 13` rule this crate does not implement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Exponent field width for a standard binary interchange format.
///
/// Fails with [`FormatError::Unimplemented`] for widths above 128 that
/// the standard defines (multiples of 32), and with
/// [`FormatError::InvalidWidth`] for everything else.
pub fn standard_exponent_bits(storage_bits: u32) -> Result<u32> {
    match storage_bits {
        16 => Ok(5),
        32 => Ok(8),
        64 => Ok(11),
        128 => Ok(15),
        w if w > 128 && w % 32 == 0 => Err(FormatError::Unimplemented { storage_bits: w }),
        w => Err(FormatError::InvalidWidth { storage_bits: w }),
    }
}

/// Mantissa field width for a standard binary interchange format.
///
/// The stored mantissa is whatever the sign and exponent fields leave:
/// `storage_bits - exponent_bits - 1`. Errors propagate unchanged from
/// [`standard_exponent_bits`].
pub fn standard_mantissa_bits(storage_bits: u32) -> Result<u32> {
    Ok(storage_bits - standard_exponent_bits(storage_bits)? - 1)
}

/// A binary interchange format layout: one sign bit, an exponent field,
/// and an explicitly stored mantissa field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BinaryFormat {
    /// Total storage width in bits, including the sign bit.
    pub storage_bits: u32,
    /// Exponent field width in bits.
    pub exponent_bits: u32,
    /// Explicitly stored mantissa width in bits (the leading significand
    /// bit is implicit and not counted).
    pub mantissa_bits: u32,
}

impl BinaryFormat {
    /// Describe an explicit layout.
    pub fn new(storage_bits: u32, exponent_bits: u32, mantissa_bits: u32) -> Self {
        Self {
            storage_bits,
            exponent_bits,
            mantissa_bits,
        }
    }

    /// The standard interchange format at the given width.
    pub fn standard(storage_bits: u32) -> Result<Self> {
        Ok(Self {
            storage_bits,
            exponent_bits: standard_exponent_bits(storage_bits)?,
            mantissa_bits: standard_mantissa_bits(storage_bits)?,
        })
    }

    /// Whether the three fields account for every storage bit.
    ///
    /// Extended formats stored with padding (x87) are not well-formed
    /// in this sense.
    pub fn is_well_formed(&self) -> bool {
        self.storage_bits == self.exponent_bits + self.mantissa_bits + 1
    }
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary{} (1 sign + {} exponent + {} mantissa)",
            self.storage_bits, self.exponent_bits, self.mantissa_bits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The four canonical splits, pinned against the 754-2008 table
    // rather than derived. A log2-based shortcut can be off by one at
    // these exact boundaries, so every width is asserted explicitly.
    #[test]
    fn standard_exponent_widths() {
        assert_eq!(standard_exponent_bits(16), Ok(5));
        assert_eq!(standard_exponent_bits(32), Ok(8));
        assert_eq!(standard_exponent_bits(64), Ok(11));
        assert_eq!(standard_exponent_bits(128), Ok(15));
    }

    #[test]
    fn standard_mantissa_widths() {
        assert_eq!(standard_mantissa_bits(16), Ok(10));
        assert_eq!(standard_mantissa_bits(32), Ok(23));
        assert_eq!(standard_mantissa_bits(64), Ok(52));
        assert_eq!(standard_mantissa_bits(128), Ok(112));
    }

    #[test]
    fn wide_multiples_of_32_are_unimplemented() {
        for w in [160, 192, 256, 1024] {
            assert_eq!(
                standard_exponent_bits(w),
                Err(FormatError::Unimplemented { storage_bits: w })
            );
            assert_eq!(
                standard_mantissa_bits(w),
                Err(FormatError::Unimplemented { storage_bits: w })
            );
        }
    }

    #[test]
    fn undefined_widths_are_invalid() {
        // 96 is a multiple of 32 but below 128; the standard starts the
        // extension rule at 128.
        for w in [0, 8, 17, 48, 63, 96, 100, 127, 129] {
            assert_eq!(
                standard_exponent_bits(w),
                Err(FormatError::InvalidWidth { storage_bits: w })
            );
        }
    }

    #[test]
    fn standard_descriptor_is_well_formed() {
        for w in [16, 32, 64, 128] {
            let fmt = BinaryFormat::standard(w).unwrap();
            assert!(fmt.is_well_formed());
            assert_eq!(fmt.storage_bits, w);
        }
    }

    #[test]
    fn standard_descriptor_propagates_errors() {
        assert_eq!(
            BinaryFormat::standard(160),
            Err(FormatError::Unimplemented { storage_bits: 160 })
        );
        assert_eq!(
            BinaryFormat::standard(40),
            Err(FormatError::InvalidWidth { storage_bits: 40 })
        );
    }

    #[test]
    fn padded_layout_is_not_well_formed() {
        // x87 extended as stored on linux-x86_64.
        let x87 = BinaryFormat::new(128, 15, 63);
        assert!(!x87.is_well_formed());
    }

    #[test]
    fn display_names_the_width() {
        let fmt = BinaryFormat::standard(64).unwrap();
        assert_eq!(
            fmt.to_string(),
            "binary64 (1 sign + 11 exponent + 52 mantissa)"
        );
    }
}
