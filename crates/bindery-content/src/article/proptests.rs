//! Property-based tests for article handling.
