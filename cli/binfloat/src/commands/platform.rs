//! `binfloat platform` — platform listing, description, and tooling
//! for `.floats.toml` definitions.

use std::path::Path;

use anyhow::{bail, Result};

use binfloat_targets::parse::{
    generate_template, load_platform_toml, platform_to_toml, validate_platform,
};
use binfloat_targets::FloatPlatform;

/// All built-in platforms with a one-line description.
pub fn builtin_platforms() -> Vec<(&'static str, &'static str)> {
    vec![
        ("host", "the build host itself, f32/f64 introspected"),
        ("linux-x86_64", "single, double, 80-bit x87 extended"),
        ("linux-aarch64", "half, single, double, binary128 quad"),
        ("stm32f407-discovery", "hardware single, software double"),
    ]
}

/// Look up a built-in platform by name.
pub fn resolve_builtin(name: &str) -> Option<FloatPlatform> {
    match name {
        "host" => Some(FloatPlatform::host()),
        "linux-x86_64" => Some(FloatPlatform::generic_linux_x86_64()),
        "linux-aarch64" => Some(FloatPlatform::generic_linux_aarch64()),
        "stm32f407-discovery" => Some(FloatPlatform::stm32f407_discovery()),
        _ => None,
    }
}

/// List all available built-in platforms.
pub fn list() -> Result<()> {
    println!("Built-in platforms:");
    println!();
    for (name, description) in builtin_platforms() {
        println!("  {name:<22} {description}");
    }
    println!();
    println!("Use 'binfloat platform describe <name>' for details.");
    Ok(())
}

/// Describe a specific platform in detail.
pub fn describe(name: &str, format: Option<&str>) -> Result<()> {
    let platform = match resolve_builtin(name) {
        Some(p) => p,
        None => bail!(
            "unknown platform: '{name}'. Use 'binfloat platform list' to see available platforms."
        ),
    };

    if format == Some("toml") {
        print!("{}", platform_to_toml(&platform)?);
        return Ok(());
    }

    println!("=== Platform: {} ===", platform.name);
    println!("Version: {}", platform.version);
    println!();
    println!("Native kinds (resolution priority order):");
    for kind in &platform.kinds {
        println!(
            "  {:<10} {:>4} bits  (1 sign + {} exponent + {} mantissa)  radix {}  iec559: {}",
            kind.kind.to_string(),
            kind.storage_bits,
            kind.exponent_bits,
            kind.mantissa_bits,
            kind.radix,
            kind.iec559,
        );
    }

    Ok(())
}

/// Print a template `.floats.toml` for a new platform.
pub fn template(name: &str) -> Result<()> {
    print!("{}", generate_template(name)?);
    Ok(())
}

/// Validate a `.floats.toml` platform definition file.
pub fn validate(path: &Path) -> Result<()> {
    let platform = load_platform_toml(path)?;
    match validate_platform(&platform) {
        Ok(()) => {
            println!("{}: OK ({} kinds)", platform.name, platform.kinds.len());
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                eprintln!("{}: {}", issue.severity, issue.message);
            }
            let errors = issues.iter().filter(|i| i.severity == "error").count();
            if errors > 0 {
                bail!("{} error(s) in '{}'", errors, platform.name);
            }
            println!(
                "{}: OK with {} warning(s)",
                platform.name,
                issues.len()
            );
            Ok(())
        }
    }
}
