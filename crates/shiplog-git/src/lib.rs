//! Shiplog Git - repository access for changelog generation
//!
//! This crate wraps libgit2 to provide the commit history and tag
//! lookups the changelog pipeline needs.

mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
