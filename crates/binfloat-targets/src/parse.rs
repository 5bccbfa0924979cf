//! TOML parsing, serialization, validation, and discovery for platform
//! definitions.
//!
//! Custom platform definitions are stored as `.floats.toml` files in
//! the `platforms/` directory of a project. This module provides
//! functions to load, validate, serialize, and discover these files.

use std::path::{Path, PathBuf};

use crate::error::{Result, TargetError};
use crate::platform::FloatPlatform;

/// A validation issue found in a platform definition.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a platform from a `.floats.toml` file.
pub fn load_platform_toml(path: &Path) -> Result<FloatPlatform> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_platform_toml(&content)
}

/// Parse a platform from a TOML string.
pub fn parse_platform_toml(toml_str: &str) -> Result<FloatPlatform> {
    let platform: FloatPlatform = toml::from_str(toml_str)?;
    Ok(platform)
}

/// Serialize a platform to pretty TOML.
pub fn platform_to_toml(platform: &FloatPlatform) -> Result<String> {
    let toml_str = toml::to_string_pretty(platform)?;
    Ok(toml_str)
}

/// Validate a platform definition for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
pub fn validate_platform(platform: &FloatPlatform) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. At least one kind exists
    if platform.kinds.is_empty() {
        issues.push(ValidationIssue {
            severity: "error",
            message: "platform has no floating-point kinds".into(),
        });
    }

    for kind in &platform.kinds {
        // 2. Sign + exponent + mantissa must fit in the storage width
        // (padding is allowed; x87 extended has 49 padding bits)
        if kind.exponent_bits + kind.mantissa_bits + 1 > kind.storage_bits {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!(
                    "kind '{}': fields (1 sign + {} exponent + {} mantissa) exceed {} storage bits",
                    kind.kind, kind.exponent_bits, kind.mantissa_bits, kind.storage_bits
                ),
            });
        }

        // 3. Zero-width exponent or mantissa fields
        if kind.exponent_bits == 0 || kind.mantissa_bits == 0 {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!(
                    "kind '{}': exponent and mantissa widths must be nonzero",
                    kind.kind
                ),
            });
        }

        // 4. An IEC 559 kind with padding bits cannot be an
        // interchange encoding
        if kind.iec559 && !kind.layout().is_well_formed() {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "kind '{}' is marked iec559 but its fields do not account for all {} storage \
                     bits; it will never match an interchange format",
                    kind.kind, kind.storage_bits
                ),
            });
        }

        // 5. Non-binary radix can never match
        if kind.radix != 2 {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "kind '{}' has radix {}; only radix-2 kinds can match an interchange format",
                    kind.kind, kind.radix
                ),
            });
        }
    }

    // 6. Duplicate kind tags
    for i in 0..platform.kinds.len() {
        for j in (i + 1)..platform.kinds.len() {
            if platform.kinds[i].kind == platform.kinds[j].kind {
                issues.push(ValidationIssue {
                    severity: "error",
                    message: format!("duplicate kind tag '{}'", platform.kinds[i].kind),
                });
            }
        }
    }

    // 7. Priority order convention: narrowest first
    for pair in platform.kinds.windows(2) {
        if pair[0].storage_bits > pair[1].storage_bits {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "kind '{}' ({} bits) listed before narrower kind '{}' ({} bits); resolution \
                     priority is table order, narrowest first by convention",
                    pair[0].kind, pair[0].storage_bits, pair[1].kind, pair[1].storage_bits
                ),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template `.floats.toml` for a new platform.
///
/// Seeds from linux-x86_64 with the given custom name.
pub fn generate_template(name: &str) -> Result<String> {
    let mut platform = FloatPlatform::generic_linux_x86_64();
    platform.name = name.into();
    platform.version = "0.1.0".into();
    platform_to_toml(&platform)
}

/// Discover all `.floats.toml` files in a project's `platforms/`
/// directory.
///
/// Returns a list of (platform_name, file_path) pairs.
pub fn discover_platforms(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let platforms_dir = project_dir.join("platforms");
    if !platforms_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut platforms = Vec::new();
    let entries = std::fs::read_dir(&platforms_dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with(".floats.toml") {
                let name = file_name.strip_suffix(".floats.toml").unwrap().to_string();
                platforms.push((name, path));
            }
        }
    }
    platforms.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(platforms)
}
