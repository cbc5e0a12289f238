//! # Chroney Domain
//!
//! Domain types and models for Chroney.
//!
//! This crate contains:
//! - Pattern types (`PatternElement`, `Pattern`, `SlotKind`)
//! - Projection output (`ProjectedEvent`)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - Only depends on `chroney-common`
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
