//! Shared formatting utilities

pub mod bytes;
