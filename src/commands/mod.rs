//! Command implementations for the CLI
//!
//! - interactive: Edit the plan in a terminal form
//! - compute: One-shot cost calculation
//! - config: Configuration display and validation

pub mod compute;
pub mod config;
pub mod interactive;
