//! # Token Vault Program
//!
//! A per-owner custody vault for SPL tokens. Each owner gets exactly one
//! vault, living at a deterministic program-derived address; the program
//! holds deposited tokens in a custody token account owned by that address
//! and releases them only on the owner's signature.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Initialize a vault record at the owner's derived custody address
//! - Deposit tokens from the owner's token account into custody
//! - Withdraw custodied tokens back to the owner, signed by the program
//!   with the vault's derivation seeds
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Vault | 42 bytes | Per-owner custody record |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | Initialize | Create the caller's vault record |
//! | 1 | Deposit | Move tokens into custody |
//! | 2 | Withdraw | Move tokens out of custody |
//!
//! ## Invariants
//!
//! - One vault per owner; the record's owner field never changes.
//! - `balance` mirrors the custody token account's amount after every
//!   successful instruction.
//! - Initialize is exactly-once; the second call fails with
//!   `AlreadyInitialized`.

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// Custody address derivation and the vault signer capability
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Vault record)
pub mod state;

/// Token Transfer Adapter (SPL Token CPI wrappers)
pub mod token;

/// Utility functions for validation and math
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Make commonly used types available at crate root
// Users can write: use token_vault_program::VaultError;
// Instead of: use token_vault_program::error::VaultError;

pub use error::VaultError;
pub use instruction::VaultInstruction;
pub use pda::{find_vault_address, VAULT_SEED};
pub use processor::Processor;
pub use state::{Pack, Vault, VaultState};

// =============================================================================
// PROGRAM ID
// =============================================================================

// This macro declares the program's on-chain address
// Replace with your actual program ID after deployment
solana_program::declare_id!("TokenVau1t111111111111111111111111111111111");
