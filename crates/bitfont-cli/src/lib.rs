//! Library half of the bitfontgen binary.
//!
//! Command implementations, artifact naming, and run reports live here so
//! they stay testable without spawning the binary.

pub mod commands;
pub mod output;
pub mod report;
