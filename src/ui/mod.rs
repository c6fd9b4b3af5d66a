//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All user-facing text goes through this module so quiet mode is honored
//! in one place. Diagnostics go through the `log` facade instead.

pub mod output;
