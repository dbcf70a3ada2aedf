//! Workflow operations

pub mod changelog;

pub use changelog::{read_changelog, write_changelog};
