//! Bindery — umbrella crate.
//!
//! This crate re-exports all Bindery components for convenience.

#![doc = include_str!("../README.md")]

pub use bindery_content as content;
pub use bindery_core as core;
