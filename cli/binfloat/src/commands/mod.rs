//! CLI command implementations.

pub mod platform;
pub mod resolve;
pub mod standard;
