//! `binfloat standard` — print the standard interchange split for a
//! storage width.

use anyhow::Result;

use binfloat_core::BinaryFormat;

/// Print the standard exponent/mantissa split at the given width.
pub fn run(storage_bits: u32) -> Result<()> {
    let format = BinaryFormat::standard(storage_bits)?;
    println!("{format}");
    Ok(())
}
