//! `binfloat resolve` — resolve a requested format against a platform.

use std::path::Path;

use anyhow::{bail, Result};

use binfloat_core::{standard_exponent_bits, standard_mantissa_bits, BinaryFormat};
use binfloat_targets::parse::load_platform_toml;
use binfloat_targets::FloatPlatform;

use crate::commands::platform::resolve_builtin;

/// Select the platform to resolve against: a `.floats.toml` file, a
/// built-in by name, or the build host.
pub fn select_platform(platform: Option<&str>, table: Option<&Path>) -> Result<FloatPlatform> {
    match (platform, table) {
        (Some(_), Some(_)) => bail!("--platform and --table are mutually exclusive"),
        (None, Some(path)) => Ok(load_platform_toml(path)?),
        (Some(name), None) => match resolve_builtin(name) {
            Some(p) => Ok(p),
            None => bail!(
                "unknown platform: '{name}'. Use 'binfloat platform list' to see available \
                 platforms."
            ),
        },
        (None, None) => Ok(FloatPlatform::host()),
    }
}

/// Resolve and print, human-readable or JSON.
pub fn run(
    storage_bits: u32,
    exponent_bits: Option<u32>,
    mantissa_bits: Option<u32>,
    platform: Option<&str>,
    table: Option<&Path>,
    json: bool,
) -> Result<()> {
    let platform = select_platform(platform, table)?;
    let kind = platform
        .table()
        .resolve(storage_bits, exponent_bits, mantissa_bits)?;

    // Reconstruct the requested descriptor for reporting; resolution
    // succeeded, so any standard-rule lookup here succeeds too.
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

    if json {
        let out = serde_json::json!({
            "platform": platform.name,
            "requested": requested,
            "kind": kind,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{requested} -> {kind} on {}", platform.name);
    }
    Ok(())
}
