//! Instruction Types
//!
//! This module defines all instructions supported by the vault program.
//! Each instruction has:
//! - A tag (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected accounts (documented, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [tag: u8][data: varies]
//! ```
//!
//! # Tag Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | Initialize |
//! | 1 | Deposit |
//! | 2 | Withdraw |

use crate::error::VaultError;
use solana_program::program_error::ProgramError;

// =============================================================================
// VAULT INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the vault program.
///
/// Each variant contains the instruction-specific data.
/// Account requirements are documented in comments but not encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum VaultInstruction {
    /// Create the caller's vault record at its derived custody address.
    ///
    /// Strictly exactly-once per owner: a second call fails with
    /// `AlreadyInitialized`. Orchestration layers that want idempotent
    /// setup catch that code and proceed.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | vault | ✓ | | Record account at the derived address |
    /// | 1 | owner | ✓ | ✓ | Controlling wallet, pays for allocation |
    /// | 2 | system_program | | | Allocates the record |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: tag (0)
    /// [1]: bump (u8)
    /// ```
    ///
    /// The bump must be the canonical one for (seed, owner); the handler
    /// re-derives and rejects anything else.
    Initialize {
        /// Canonical bump for the caller's custody address
        bump: u8,
    },

    /// Move tokens from the owner's token account into custody.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | vault | ✓ | | Record account |
    /// | 1 | owner | | ✓ | Recorded vault owner |
    /// | 2 | user_token | ✓ | | Owner's token account (source) |
    /// | 3 | custody_token | ✓ | | Vault's token account (destination) |
    /// | 4 | token_program | | | SPL Token program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: tag (1)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Deposit {
        /// Base units to move into custody (must be nonzero)
        amount: u64,
    },

    /// Move tokens out of custody back to the owner's token account.
    ///
    /// The transfer out of custody is signed by the program with the
    /// vault's derivation seeds; no private key is involved.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | vault | ✓ | | Record account |
    /// | 1 | owner | | ✓ | Recorded vault owner |
    /// | 2 | user_token | ✓ | | Owner's token account (destination) |
    /// | 3 | custody_token | ✓ | | Vault's token account (source) |
    /// | 4 | vault_signer | | | Derived authority for the custody account |
    /// | 5 | token_program | | | SPL Token program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: tag (2)
    /// [1..9]: amount (u64, little-endian)
    /// ```
    Withdraw {
        /// Base units to move out of custody (must be nonzero,
        /// at most the tracked balance)
        amount: u64,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl VaultInstruction {
    /// Parse instruction data into a VaultInstruction.
    ///
    /// # Arguments
    /// * `input` - Raw instruction data bytes
    ///
    /// # Returns
    /// * `Ok(VaultInstruction)` - Successfully parsed instruction
    /// * `Err(InvalidInstruction)` - Could not parse
    ///
    /// # Format
    ///
    /// First byte is the tag, remaining bytes are instruction-specific.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // Get the tag (first byte)
        let (&tag, rest) = input
            .split_first()
            .ok_or(VaultError::InvalidInstruction)?;

        // Parse based on tag
        Ok(match tag {
            // =================================================================
            // 0: Initialize
            // =================================================================
            0 => {
                if rest.is_empty() {
                    return Err(VaultError::InvalidInstruction.into());
                }
                VaultInstruction::Initialize { bump: rest[0] }
            }

            // =================================================================
            // 1: Deposit
            // =================================================================
            1 => {
                if rest.len() < 8 {
                    return Err(VaultError::InvalidInstruction.into());
                }
                let amount = u64::from_le_bytes(
                    rest[..8]
                        .try_into()
                        .map_err(|_| VaultError::InvalidInstruction)?,
                );
                VaultInstruction::Deposit { amount }
            }

            // =================================================================
            // 2: Withdraw
            // =================================================================
            2 => {
                if rest.len() < 8 {
                    return Err(VaultError::InvalidInstruction.into());
                }
                let amount = u64::from_le_bytes(
                    rest[..8]
                        .try_into()
                        .map_err(|_| VaultError::InvalidInstruction)?,
                );
                VaultInstruction::Withdraw { amount }
            }

            // =================================================================
            // Unknown instruction
            // =================================================================
            _ => return Err(VaultError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    /// Used by tests and client libraries to create instruction data.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            VaultInstruction::Initialize { bump } => {
                buf.push(0); // tag
                buf.push(*bump);
            }

            VaultInstruction::Deposit { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            VaultInstruction::Withdraw { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
