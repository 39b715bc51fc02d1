//! Core utilities and types for the solwiz Solidity contract generator.
//!
//! This crate provides fundamental types and utilities used across
//! the solwiz crates.

mod file;
mod literal;
mod version;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Solidity text helpers
pub use literal::{is_identifier, is_reserved_word, string_literal};
pub use version::{OPENZEPPELIN_CONTRACTS, Version};
