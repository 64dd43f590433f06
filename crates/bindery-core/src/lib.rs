//! Bindery Core — shared error types and result alias.
//!
//! This crate provides the foundational types used across all Bindery
//! crates. It has no internal Bindery dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]

pub mod error;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
