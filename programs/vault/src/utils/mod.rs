//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Common validation checks (ownership, signer, etc.)

pub mod assertions;

// Re-export all utilities for easy access
pub use assertions::*;
