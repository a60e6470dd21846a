//! Shared types, error model, and configuration for featuregate.
//!
//! This crate is the foundation depended on by the other featuregate crates.
//! It provides:
//! - [`FeatureGateError`] — the unified error type
//! - Domain types ([`FeatureArg`], [`FeatureName`], [`Polarity`], [`Combination`])
//! - Configuration ([`GateConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{ClassesConfig, GateConfig, load_config_from};
pub use error::{FeatureGateError, Result};
pub use types::{Combination, FeatureArg, FeatureName, Polarity};
