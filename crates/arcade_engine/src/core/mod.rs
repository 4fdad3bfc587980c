//! # Core Engine Module
//!
//! Shared abstractions that other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Engine-level configuration (logging, debug overlay, screen)
//! - **Foundation**: Low-level utilities (math, collections, time)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{EngineConfig, ScreenConfig};
pub use crate::config::{Config, ConfigError};
