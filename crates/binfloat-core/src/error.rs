//! Error types for format resolution.

use crate::format::BinaryFormat;

/// Errors from the standard-width rule and format resolution.
///
/// The three variants are deliberately non-overlapping: callers decide
/// differently depending on whether a request is nonsensical per the
/// standard, valid-but-uncoded, or valid-but-absent on this platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// IEEE 754-2008 defines no binary interchange format at this width.
    #[error(
        "IEEE 754-2008 defines no binary interchange format with {storage_bits} storage bits \
         (defined widths: 16, 32, 64, 128, and any multiple of 32 of at least 128)"
    )]
    InvalidWidth {
        /// The requested storage width in bits.
        storage_bits: u32,
    },

    /// Valid per the standard's multiple-of-32 extension rule, but the
    /// exponent-width derivation for widths above 128 is not coded.
    #[error(
        "binary{storage_bits} is a valid IEEE 754-2008 interchange format, but widths above \
         128 bits are not implemented"
    )]
    Unimplemented {
        /// The requested storage width in bits.
        storage_bits: u32,
    },

    /// Well-formed request, but no native kind on this platform
    /// implements the layout.
    #[error("no native floating-point kind matches {requested}")]
    NotFound {
        /// The format that was requested.
        requested: BinaryFormat,
    },
}

/// Result type for format resolution.
pub type Result<T> = std::result::Result<T, FormatError>;
