//! MongoDB Index Audit
//!
//! Collection/index size reporting and prefix-redundant index detection
//! for MongoDB clusters.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod memory;
pub mod mongo;
pub mod types;
pub mod utils;
