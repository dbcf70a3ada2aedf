//! shiplog core - configuration, errors, and changelog file handling
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the shiplog changelog generator.

pub mod config;
pub mod error;
pub mod workflow;

pub use error::{ConfigError, GitError, Result, ShiplogError};
