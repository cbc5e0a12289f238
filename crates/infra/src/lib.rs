//! # Chroney Infrastructure
//!
//! The impure edges of the workspace.
//!
//! This crate contains:
//! - Configuration loading (environment, `.env`, JSON/TOML files)
//! - Tracing subscriber initialisation
//!
//! ## Architecture
//! - Depends on `chroney-common` and `chroney-domain`
//! - Contains all code that touches the filesystem or process environment

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use config::load;
pub use observability::init_tracing;
