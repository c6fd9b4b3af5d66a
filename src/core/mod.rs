//! core
//!
//! Core domain types, storage, and configuration for envc.
//!
//! # Modules
//!
//! - [`types`] - Strong types: VariableName, Toggle
//! - [`table`] - Table model, file codec, backends, and the store
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for the table file
//!
//! # Design Principles
//!
//! - The table file is the single source of truth; nothing is cached
//!   between operations
//! - The comment-marker convention is confined to the codec
//! - Lookups are linear scans with explicit predicates, so duplicate names
//!   resolve by file order

pub mod config;
pub mod paths;
pub mod table;
pub mod types;
