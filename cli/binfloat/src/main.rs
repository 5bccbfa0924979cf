//! binfloat CLI — resolve IEEE 754-2008 binary interchange formats to
//! native floating-point kinds.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "binfloat",
    version,
    about = "Resolve IEEE 754-2008 interchange formats to native float kinds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the standard exponent/mantissa split for a storage width
    Standard {
        /// Storage width in bits (16, 32, 64, or 128)
        storage_bits: u32,
    },
    /// Resolve a format to the native kind implementing it
    Resolve {
        /// Storage width in bits
        storage_bits: u32,
        /// Explicit exponent width (default: standard-width rule)
        #[arg(long)]
        exponent_bits: Option<u32>,
        /// Explicit mantissa width (default: standard-width rule)
        #[arg(long)]
        mantissa_bits: Option<u32>,
        /// Resolve against a built-in platform (default: the build host)
        #[arg(long)]
        platform: Option<String>,
        /// Resolve against a .floats.toml platform definition
        #[arg(long)]
        table: Option<PathBuf>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect and manage platform definitions
    Platform {
        #[command(subcommand)]
        action: PlatformAction,
    },
}

#[derive(Subcommand)]
enum PlatformAction {
    /// List available built-in platforms
    List,
    /// Show the native kinds of a platform
    Describe {
        /// Platform name
        name: String,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print a template .floats.toml definition
    Template {
        /// Platform name
        name: String,
    },
    /// Validate a .floats.toml definition file
    Validate {
        /// Path to the definition file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Standard { storage_bits } => commands::standard::run(storage_bits),

        Commands::Resolve {
            storage_bits,
            exponent_bits,
            mantissa_bits,
            platform,
            table,
            json,
        } => commands::resolve::run(
            storage_bits,
            exponent_bits,
            mantissa_bits,
            platform.as_deref(),
            table.as_deref(),
            json,
        ),

        Commands::Platform { action } => match action {
            PlatformAction::List => commands::platform::list(),
            PlatformAction::Describe { name, format } => {
                commands::platform::describe(&name, format.as_deref())
            }
            PlatformAction::Template { name } => commands::platform::template(&name),
            PlatformAction::Validate { path } => commands::platform::validate(&path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolving against a .floats.toml file goes through the same
    /// path as built-ins.
    #[test]
    fn resolve_against_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad-board.floats.toml");
        let template = binfloat_targets::parse::generate_template("quad-board").unwrap();
        std::fs::write(&path, template).unwrap();

        // Template seeds from linux-x86_64: double resolves, quad does not.
        commands::resolve::run(64, None, None, None, Some(&path), false).unwrap();
        assert!(commands::resolve::run(128, None, None, None, Some(&path), false).is_err());
    }

    /// The three failure kinds surface with distinct messages.
    #[test]
    fn error_messages_are_distinguishable() {
        let invalid = commands::resolve::run(48, None, None, None, None, false)
            .unwrap_err()
            .to_string();
        let unimplemented = commands::resolve::run(256, None, None, None, None, false)
            .unwrap_err()
            .to_string();
        let not_found = commands::resolve::run(16, None, None, None, None, false)
            .unwrap_err()
            .to_string();

        assert!(invalid.contains("defines no binary interchange format"));
        assert!(unimplemented.contains("not implemented"));
        assert!(not_found.contains("no native floating-point kind"));
    }

    /// The demo query from the original: binary64 resolves to double.
    #[test]
    fn binary64_resolves_on_host() {
        commands::resolve::run(64, None, None, None, None, false).unwrap();
        commands::standard::run(64).unwrap();
    }
}
