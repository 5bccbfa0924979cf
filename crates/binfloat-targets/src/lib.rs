//! Target platform floating-point models.
//!
//! A [`FloatPlatform`] names a platform and lists the native
//! floating-point kinds it offers, in resolution priority order. The
//! model is plain data: built-in constructors cover the common
//! platforms, and custom platforms load from `.floats.toml` files, so
//! resolution is testable against any platform without building there.

pub mod error;
pub mod parse;
pub mod platform;

pub use error::{Result, TargetError};
pub use platform::FloatPlatform;
