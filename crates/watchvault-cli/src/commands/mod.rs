//! Subcommand implementations
//!
//! Each command writes its result to the given writer so it can be driven
//! from tests without capturing stdout.

pub mod identity;
pub mod import;
pub mod positions;
