//! Per-platform floating-point kind tables.
//!
//! Assembles the native kinds a platform offers into a named model
//! that projects into a `binfloat_core::FloatTable` for resolution.

use serde::{Deserialize, Serialize};

use binfloat_core::{FloatKind, FloatTable, NativeFloat};

/// The floating-point kinds available on one target platform, in
/// resolution priority order (narrowest first by convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FloatPlatform {
    /// Platform name (e.g., "linux-x86_64", "stm32f407-discovery").
    pub name: String,
    /// Platform model version.
    pub version: String,
    /// Native kinds in priority order.
    pub kinds: Vec<NativeFloat>,
}

impl FloatPlatform {
    /// Assemble a platform from its kind list.
    pub fn new(name: impl Into<String>, version: impl Into<String>, kinds: Vec<NativeFloat>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kinds,
        }
    }

    /// Project the kind list into a resolution table.
    pub fn table(&self) -> FloatTable {
        FloatTable::new(self.kinds.clone())
    }

    /// The build host itself: `f32` and `f64`, introspected.
    pub fn host() -> Self {
        Self::new(
            "host",
            "introspected",
            vec![
                NativeFloat::of::<f32>(FloatKind::Single),
                NativeFloat::of::<f64>(FloatKind::Double),
            ],
        )
    }

    /// Generic Linux x86-64: single, double, and x87 extended
    /// precision. `long double` occupies 128 bits in memory but holds
    /// an 80-bit format (15-bit exponent, 63 explicit mantissa bits)
    /// that is not a 754-2008 interchange encoding, so a binary128
    /// request does not resolve here.
    pub fn generic_linux_x86_64() -> Self {
        Self::new(
            "linux-x86_64",
            "generic",
            vec![
                NativeFloat::of::<f32>(FloatKind::Single),
                NativeFloat::of::<f64>(FloatKind::Double),
                NativeFloat {
                    kind: FloatKind::Extended,
                    storage_bits: 128,
                    exponent_bits: 15,
                    mantissa_bits: 63,
                    radix: 2,
                    iec559: false,
                },
            ],
        )
    }

    /// Generic Linux AArch64: `_Float16` half precision through
    /// binary128 `long double`, all IEC 559 conformant.
    pub fn generic_linux_aarch64() -> Self {
        Self::new(
            "linux-aarch64",
            "generic",
            vec![
                NativeFloat {
                    kind: FloatKind::Half,
                    storage_bits: 16,
                    exponent_bits: 5,
                    mantissa_bits: 10,
                    radix: 2,
                    iec559: true,
                },
                NativeFloat::of::<f32>(FloatKind::Single),
                NativeFloat::of::<f64>(FloatKind::Double),
                NativeFloat {
                    kind: FloatKind::Quad,
                    storage_bits: 128,
                    exponent_bits: 15,
                    mantissa_bits: 112,
                    radix: 2,
                    iec559: true,
                },
            ],
        )
    }

    /// STM32F407 Discovery board: hardware single precision, software
    /// double precision (still IEEE-conformant).
    pub fn stm32f407_discovery() -> Self {
        Self::new(
            "stm32f407-discovery",
            "1.0",
            vec![
                NativeFloat::of::<f32>(FloatKind::Single),
                NativeFloat::of::<f64>(FloatKind::Double),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binfloat_core::FormatError;

    #[test]
    fn host_platform() {
        let p = FloatPlatform::host();
        let table = p.table();
        assert_eq!(table.resolve(32, None, None), Ok(FloatKind::Single));
        assert_eq!(table.resolve(64, None, None), Ok(FloatKind::Double));
    }

    #[test]
    fn x86_64_has_no_binary128() {
        let table = FloatPlatform::generic_linux_x86_64().table();
        assert_eq!(table.resolve(64, None, None), Ok(FloatKind::Double));
        // The widest kind is 80-bit extended; a quad request is
        // well-formed but unsatisfiable.
        assert!(matches!(
            table.resolve(128, None, None),
            Err(FormatError::NotFound { .. })
        ));
        // Naming the extended layout explicitly also fails: the format
        // is not IEC 559 certified.
        assert!(matches!(
            table.resolve(128, Some(15), Some(63)),
            Err(FormatError::NotFound { .. })
        ));
    }

    #[test]
    fn x86_64_has_no_half() {
        let table = FloatPlatform::generic_linux_x86_64().table();
        assert!(matches!(
            table.resolve(16, None, None),
            Err(FormatError::NotFound { .. })
        ));
    }

    #[test]
    fn aarch64_resolves_half_and_quad() {
        let table = FloatPlatform::generic_linux_aarch64().table();
        assert_eq!(table.resolve(16, None, None), Ok(FloatKind::Half));
        assert_eq!(table.resolve(32, None, None), Ok(FloatKind::Single));
        assert_eq!(table.resolve(64, None, None), Ok(FloatKind::Double));
        assert_eq!(table.resolve(128, None, None), Ok(FloatKind::Quad));
    }

    #[test]
    fn stm32_resolves_single_and_double_only() {
        let table = FloatPlatform::stm32f407_discovery().table();
        assert_eq!(table.resolve(32, None, None), Ok(FloatKind::Single));
        assert_eq!(table.resolve(64, None, None), Ok(FloatKind::Double));
        assert!(matches!(
            table.resolve(128, None, None),
            Err(FormatError::NotFound { .. })
        ));
    }

    #[test]
    fn builtin_kind_layouts_are_standard() {
        let p = FloatPlatform::generic_linux_aarch64();
        for kind in &p.kinds {
            assert!(kind.layout().is_well_formed(), "{:?}", kind.kind);
            assert!(kind.iec559);
        }
    }
}
